//! URL generation with the `subdomain` option.

use serde_json::Value;
use subdomain_router::url::{RewriteError, SubdomainDirective, UrlOptions, UrlTarget};

mod common;

use common::{echo_url_for, test_config};

fn options(host: &str) -> UrlOptions {
    UrlOptions::new().with("host", host)
}

fn rewritten(target: UrlTarget) -> UrlOptions {
    match target {
        UrlTarget::Options(options) => options,
        UrlTarget::Literal(literal) => panic!("expected options, got literal {literal:?}"),
    }
}

#[test]
fn test_literal_target_passed_to_generator() {
    let url_for = echo_url_for(test_config());
    assert_eq!(
        url_for.url_for("foo", Some("test.host")).unwrap(),
        UrlTarget::Literal("foo".into())
    );
}

#[test]
fn test_given_host_left_untouched_without_subdomain() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "sd.foo.bar", "baz.bat.foo.bar"] {
        let result = rewritten(url_for.url_for(options(host), Some("test.host")).unwrap());
        assert_eq!(result, options(host));
    }
}

#[test]
fn test_given_host_subdomain_replaced() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "baz.foo.bar", "baz.bat.foo.bar"] {
        let target = options(host).with("subdomain", "sd");
        let result = rewritten(url_for.url_for(target, Some("test.host")).unwrap());
        assert_eq!(result, options("sd.foo.bar"));
    }
}

#[test]
fn test_given_host_default_subdomain() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "baz.foo.bar", "baz.bat.foo.bar"] {
        let target = options(host).with("subdomain", false);
        let result = rewritten(url_for.url_for(target, Some("test.host")).unwrap());
        assert_eq!(result, options("foo.bar"));
    }
}

#[test]
fn test_request_host_untouched_when_subdomain_null() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "sd.foo.bar", "baz.bat.foo.bar"] {
        let target = UrlOptions::new().with("subdomain", Value::Null);
        let result = rewritten(url_for.url_for(target, Some(host)).unwrap());
        assert!(result.is_empty());
    }
}

#[test]
fn test_request_host_subdomain_replaced() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "baz.foo.bar", "baz.bat.foo.bar"] {
        let target = UrlOptions::new().with_subdomain("sd".into());
        let result = rewritten(url_for.url_for(target, Some(host)).unwrap());
        assert_eq!(result, options("sd.foo.bar"));
    }
}

#[test]
fn test_request_host_default_subdomain() {
    let url_for = echo_url_for(test_config());
    for host in ["foo.bar", "baz.foo.bar", "baz.bat.foo.bar"] {
        let target = UrlOptions::new().with_subdomain(SubdomainDirective::UseDefault);
        let result = rewritten(url_for.url_for(target, Some(host)).unwrap());
        assert_eq!(result, options("foo.bar"));
    }
}

#[test]
fn test_no_request_falls_back_to_domain() {
    let url_for = echo_url_for(test_config());
    let target = UrlOptions::new().with("subdomain", "sd");
    assert_eq!(
        rewritten(url_for.url_for(target, None).unwrap()),
        options("sd.test.host")
    );
}

#[test]
fn test_explicit_label_yields_tld_plus_two_labels() {
    for tld_components in 0..4 {
        let url_for = echo_url_for(test_config().with_tld_components(tld_components));
        let target = options("a.b.c.d.e.f").with("subdomain", "sd");
        let result = rewritten(url_for.url_for(target, None).unwrap());
        let host = result.host().unwrap();
        let labels: Vec<&str> = host.split('.').collect();
        assert_eq!(labels.len(), tld_components + 2);
        assert_eq!(labels[0], "sd");
    }
}

#[test]
fn test_default_subdomain_www() {
    let url_for = echo_url_for(test_config().with_default_subdomain("www"));
    let target = options("acme.foo.bar").with("subdomain", false);
    assert_eq!(
        rewritten(url_for.url_for(target, None).unwrap()),
        options("www.foo.bar")
    );
}

#[test]
fn test_unset_is_idempotent() {
    let url_for = echo_url_for(test_config());
    let first = rewritten(
        url_for
            .url_for(options("baz.bat.foo.bar").with("subdomain", Value::Null), None)
            .unwrap(),
    );
    let second = rewritten(
        url_for
            .url_for(first.clone().with("subdomain", Value::Null), None)
            .unwrap(),
    );
    assert_eq!(first, options("baz.bat.foo.bar"));
    assert_eq!(second, first);
}

#[test]
fn test_invalid_directive_raises_invalid_argument() {
    let url_for = echo_url_for(test_config());
    for value in [serde_json::json!(1), serde_json::json!(true), serde_json::json!({})] {
        let err = url_for
            .url_for(options("foo.bar").with("subdomain", value), None)
            .unwrap_err();
        assert!(matches!(err, RewriteError::InvalidArgument(_)));
        assert!(err.to_string().contains("null, false, or a string"));
    }
}

#[test]
fn test_generator_called_with_rewritten_options() {
    use std::cell::RefCell;
    use subdomain_router::url::{SubdomainUrlFor, UrlGenerator};

    #[derive(Default)]
    struct Recording(RefCell<Vec<UrlTarget>>);

    impl UrlGenerator for &Recording {
        type Output = &'static str;
        type Error = RewriteError;

        fn generate(&self, target: UrlTarget) -> Result<&'static str, RewriteError> {
            self.0.borrow_mut().push(target);
            Ok("generated")
        }
    }

    let recording = Recording::default();
    let url_for = SubdomainUrlFor::new(&recording, std::sync::Arc::new(test_config()));
    let result = url_for
        .url_for(options("x.foo.bar").with("subdomain", "sd"), None)
        .unwrap();

    assert_eq!(result, "generated");
    drop(url_for);
    assert_eq!(
        recording.0.into_inner(),
        vec![UrlTarget::Options(options("sd.foo.bar"))]
    );
}
