//! Descriptor-driven controller registration: verb coverage, prepend
//! paths, middleware declarations, and first-declaration-wins.

use std::sync::Arc;

use switchyard_router::testing::MockTransport;
use switchyard_router::{
    Controller, HttpMethod, RequestContext, RouteDescriptor, Router, StatusCode,
};

/// One controller covering all four verbs on the same path.
struct CrudController;

impl Controller for CrudController {
    fn name(&self) -> &str {
        "CrudController"
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new(HttpMethod::GET, "/crud-hello-world", "index"),
            RouteDescriptor::new(HttpMethod::PUT, "/crud-hello-world", "update"),
            RouteDescriptor::new(HttpMethod::POST, "/crud-hello-world", "create"),
            RouteDescriptor::new(HttpMethod::DELETE, "/crud-hello-world", "destroy"),
        ]
    }

    fn call(&self, handler_name: &str, _ctx: &RequestContext) -> String {
        match handler_name {
            "index" => "CRUD GET - Hello World".to_string(),
            "update" => "CRUD PUT - Hello World".to_string(),
            "create" => "CRUD POST - Hello World".to_string(),
            "destroy" => "CRUD DELETE - Hello World".to_string(),
            _ => String::new(),
        }
    }
}

struct HelloController;

impl Controller for HelloController {
    fn name(&self) -> &str {
        "HelloController"
    }

    fn routes(&self) -> Vec<RouteDescriptor> {
        vec![
            RouteDescriptor::new(HttpMethod::GET, "/hello-world", "home_get"),
            RouteDescriptor::new(HttpMethod::POST, "/hello-world", "home_post"),
            RouteDescriptor::new(HttpMethod::GET, "/hello-world/segment/[0-9]+", "home_segment"),
            RouteDescriptor::new(HttpMethod::GET, "/hello-world-middleware", "greeting")
                .with_middleware(["hello"]),
            RouteDescriptor::new(HttpMethod::GET, "/hello-world-multi-middleware", "greeting")
                .with_middleware(["best", "hello"]),
        ]
    }

    fn call(&self, handler_name: &str, ctx: &RequestContext) -> String {
        match handler_name {
            "home_get" => "GET - Hello World".to_string(),
            "home_post" => "POST - Hello World".to_string(),
            "home_segment" => ctx.segment(1).to_string(),
            "greeting" => "World GET".to_string(),
            _ => String::new(),
        }
    }
}

fn call(router: &Router, method: &str, target: &str) -> MockTransport {
    let mut transport = MockTransport::request(method, target);
    router.run(&mut transport);
    transport
}

#[test]
fn crud_controller_registers_every_verb() {
    let mut router = Router::new();
    router.register_controller(Arc::new(CrudController)).unwrap();

    for (method, expected) in [
        ("GET", "CRUD GET - Hello World"),
        ("PUT", "CRUD PUT - Hello World"),
        ("POST", "CRUD POST - Hello World"),
        ("DELETE", "CRUD DELETE - Hello World"),
    ] {
        let response = call(&router, method, "/crud-hello-world");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), expected);
    }
}

#[test]
fn declared_handlers_dispatch_by_verb_and_pattern() {
    let mut router = Router::new();
    router.register_middleware("hello", |_: &RequestContext| "Hello ".to_string());
    router.register_middleware("best", |_: &RequestContext| "The best ".to_string());
    router.register_controller(Arc::new(HelloController)).unwrap();

    let response = call(&router, "GET", "/hello-world");
    assert_eq!(response.body(), "GET - Hello World");

    let response = call(&router, "POST", "/hello-world");
    assert_eq!(response.body(), "POST - Hello World");

    let response = call(&router, "GET", "/hello-world/segment/123");
    assert_eq!(response.body(), "segment");
}

#[test]
fn controller_middleware_runs_in_declared_order() {
    let mut router = Router::new();
    router.register_middleware("hello", |_: &RequestContext| "Hello ".to_string());
    router.register_middleware("best", |_: &RequestContext| "The best ".to_string());
    router.register_controller(Arc::new(HelloController)).unwrap();

    let response = call(&router, "GET", "/hello-world-middleware");
    assert_eq!(response.body(), "Hello World GET");

    // First-declaration-wins keeps the single-middleware binding for the
    // shared "greeting" handler, so the multi-middleware path is absent.
    let response = call(&router, "GET", "/hello-world-multi-middleware");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn base_path_prefixes_every_declared_route() {
    struct ApiController;

    impl Controller for ApiController {
        fn name(&self) -> &str {
            "ApiController"
        }

        fn base_path(&self) -> &str {
            "/api/v1"
        }

        fn routes(&self) -> Vec<RouteDescriptor> {
            vec![
                RouteDescriptor::new(HttpMethod::GET, "/status", "status"),
                RouteDescriptor::new(HttpMethod::GET, "/users/{id}", "show"),
            ]
        }

        fn call(&self, handler_name: &str, ctx: &RequestContext) -> String {
            match handler_name {
                "status" => "ok".to_string(),
                "show" => ctx.attribute("id", "").to_string(),
                _ => String::new(),
            }
        }
    }

    let mut router = Router::new();
    router.register_controller(Arc::new(ApiController)).unwrap();

    assert_eq!(call(&router, "GET", "/api/v1/status").body(), "ok");
    assert_eq!(call(&router, "GET", "/api/v1/users/42").body(), "42");
    assert_eq!(
        call(&router, "GET", "/status").status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn unknown_controller_middleware_is_a_registration_error() {
    struct BrokenController;

    impl Controller for BrokenController {
        fn name(&self) -> &str {
            "BrokenController"
        }

        fn routes(&self) -> Vec<RouteDescriptor> {
            vec![RouteDescriptor::new(HttpMethod::GET, "/broken", "index")
                .with_middleware(["missing"])]
        }

        fn call(&self, _handler_name: &str, _ctx: &RequestContext) -> String {
            String::new()
        }
    }

    let mut router = Router::new();
    let result = router.register_controller(Arc::new(BrokenController));
    assert!(result.is_err());
    assert!(router.exists(HttpMethod::GET, "/broken").is_none());
}

#[test]
fn colliding_controller_route_is_skipped_but_others_register() {
    let mut router = Router::new();
    router
        .register(HttpMethod::GET, "/crud-hello-world", |_| "direct".to_string(), &[])
        .unwrap();
    router.register_controller(Arc::new(CrudController)).unwrap();

    // The explicit registration stays active for GET...
    assert_eq!(call(&router, "GET", "/crud-hello-world").body(), "direct");
    // ...while the controller's other verbs registered normally.
    assert_eq!(
        call(&router, "PUT", "/crud-hello-world").body(),
        "CRUD PUT - Hello World"
    );
}
