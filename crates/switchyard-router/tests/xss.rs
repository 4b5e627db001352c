//! Query sanitization: values are entity-encoded before a handler can
//! echo them.

use switchyard_router::testing::MockTransport;
use switchyard_router::{HttpMethod, Router, StatusCode};

#[test]
fn query_values_are_entity_encoded() {
    let mut router = Router::new();
    router
        .register(
            HttpMethod::GET,
            "/xss",
            |ctx| ctx.query_parameter("q").to_string(),
            &[],
        )
        .unwrap();

    let mut transport =
        MockTransport::get("/xss?q=%3Cscript%3Ealert(%27XSS%27)%3C%2Fscript%3E");
    router.run(&mut transport);

    assert_eq!(transport.status(), StatusCode::OK);
    assert_eq!(
        transport.body(),
        "&lt;script&gt;alert(&#039;XSS&#039;)&lt;/script&gt;"
    );
}

#[test]
fn template_query_variables_are_sanitized_too() {
    let mut router = Router::new();
    router
        .register(
            HttpMethod::GET,
            "/echo/{topic}/{?q}",
            |ctx| ctx.attribute("q", "").to_string(),
            &[],
        )
        .unwrap();

    let outcome = router.dispatch("GET", "/echo/t?q=%3Cb%3E");
    assert_eq!(outcome.body(), "&lt;b&gt;");
}
