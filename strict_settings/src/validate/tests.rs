//! Tests for the unset-field walk and the leaf implementations.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::time::Duration;

use rstest::rstest;
use serde::Deserialize;

use super::*;
use crate::Validate;

#[derive(Debug, Default, Clone, Validate)]
struct Paths {
    movies: String,
    shows: String,
    animes: String,
}

#[derive(Debug, Default, Clone, Validate)]
struct Remote {
    host: String,
    port: u16,
    path: Paths,
    reload: u32,
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
struct Endpoint {
    host: String,
    port: u16,
}

fn complete_remote() -> Remote {
    Remote {
        host: String::from("db.local"),
        port: 8080,
        path: Paths {
            movies: String::from("/media/movies"),
            shows: String::from("/media/shows"),
            animes: String::from("/media/animes"),
        },
        reload: 30,
    }
}

#[rstest]
fn complete_record_passes() {
    let remote = complete_remote();
    assert_eq!(remote.first_unset(), None);
    assert!(remote.is_complete());
    assert!(validate(&remote).is_ok());
}

#[rstest]
fn empty_host_is_reported() {
    let endpoint = Endpoint {
        host: String::new(),
        port: 8080,
    };
    let err = validate(&endpoint).expect_err("host is unset");
    assert_eq!(err.unset_field().map(ToString::to_string).as_deref(), Some("host"));
}

#[rstest]
fn nested_field_is_reported_before_later_siblings() {
    let remote = Remote {
        path: Paths {
            movies: String::new(),
            shows: String::from("x"),
            animes: String::from("y"),
        },
        reload: 0,
        ..complete_remote()
    };
    let field = remote.first_unset().expect("movies is unset");
    assert_eq!(field, "path.movies");
    assert_eq!(field.segments(), ["path", "movies"]);
}

#[rstest]
fn default_nested_record_reports_its_first_leaf() {
    let remote = Remote {
        path: Paths::default(),
        ..complete_remote()
    };
    assert_eq!(
        remote.first_unset().map(|field| field.to_string()),
        Some(String::from("path.movies"))
    );
}

#[rstest]
#[case::first(Remote { host: String::new(), ..complete_remote() }, "host")]
#[case::scalar_before_nested(Remote { port: 0, path: Paths::default(), ..complete_remote() }, "port")]
#[case::last_nested_leaf(
    Remote { path: Paths { animes: String::new(), ..complete_remote().path }, ..complete_remote() },
    "path.animes"
)]
#[case::last(Remote { reload: 0, ..complete_remote() }, "reload")]
#[case::all_default(Remote::default(), "host")]
fn first_unset_follows_declaration_order(#[case] remote: Remote, #[case] expected: &str) {
    let field = remote.first_unset().expect("a field is unset");
    assert_eq!(field.to_string(), expected);
}

#[derive(Debug, Default, Validate)]
struct Deep {
    outer: Middle,
}

#[derive(Debug, Default, Validate)]
struct Middle {
    inner: Endpoint,
}

#[rstest]
fn paths_nest_through_several_levels() {
    let deep = Deep {
        outer: Middle {
            inner: Endpoint {
                host: String::from("db.local"),
                port: 0,
            },
        },
    };
    assert_eq!(deep.first_unset().expect("port unset"), "outer.inner.port");
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct Renamed {
    reload_interval: u32,
    #[serde(rename = "remote")]
    endpoint: Endpoint,
    #[settings(rename = "TOKEN")]
    api_token: String,
}

#[rstest]
fn reported_keys_follow_serde_names() {
    let mut renamed = Renamed::default();
    assert_eq!(renamed.first_unset().expect("unset"), "reloadInterval");
    renamed.reload_interval = 5;
    assert_eq!(renamed.first_unset().expect("unset"), "remote.host");
    renamed.endpoint = Endpoint {
        host: String::from("db.local"),
        port: 22,
    };
    assert_eq!(renamed.first_unset().expect("unset"), "TOKEN");
}

#[derive(Debug, Default, Deserialize, Validate)]
struct WithFlatten {
    name: String,
    #[serde(flatten)]
    endpoint: Endpoint,
}

#[rstest]
fn flattened_fields_report_their_own_keys() {
    let flattened = WithFlatten {
        name: String::from("primary"),
        endpoint: Endpoint::default(),
    };
    assert_eq!(flattened.first_unset().expect("host unset"), "host");
}

fn default_host() -> String {
    String::from("localhost")
}

#[derive(Debug, Default, Deserialize, Validate)]
struct MixedSerdeEntries {
    #[serde(default = "default_host", rename = "hostname")]
    host: String,
    #[serde(rename(serialize = "out", deserialize = "retry_after"))]
    retry: u32,
}

#[rstest]
fn serde_entries_after_valued_ones_are_honoured() {
    let mut mixed = MixedSerdeEntries::default();
    assert_eq!(mixed.first_unset().expect("host unset"), "hostname");
    mixed.host = default_host();
    assert_eq!(mixed.first_unset().expect("retry unset"), "retry_after");
}

#[derive(Debug, Default, Validate)]
struct WithSkip {
    host: String,
    #[settings(skip)]
    retries: u8,
}

#[rstest]
fn skipped_fields_may_stay_default() {
    let skipped = WithSkip {
        host: String::from("db.local"),
        retries: 0,
    };
    assert!(skipped.is_complete());
}

#[derive(Debug, Default, Validate)]
struct WithOptional {
    proxy: Option<Endpoint>,
}

#[rstest]
fn optional_fields_are_unset_when_none() {
    let mut optional = WithOptional::default();
    assert_eq!(optional.first_unset().expect("proxy unset"), "proxy");
    optional.proxy = Some(Endpoint {
        host: String::from("proxy.local"),
        port: 0,
    });
    assert_eq!(optional.first_unset().expect("port unset"), "proxy.port");
}

#[derive(Debug, Validate)]
struct Wrapper<T> {
    inner: T,
}

#[rstest]
fn generic_records_delegate_to_their_parameter() {
    assert_eq!(
        Wrapper { inner: 0_u64 }.first_unset().expect("inner unset"),
        "inner"
    );
    assert!(Wrapper { inner: complete_remote() }.is_complete());
}

#[derive(Debug, Default, Validate)]
struct Empty {}

#[derive(Debug, Default, Validate)]
struct Marker;

#[rstest]
fn records_without_fields_pass() {
    assert!(Empty {}.is_complete());
    assert!(Marker.is_complete());
}

fn is_unset<T: Validate + ?Sized>(value: &T) -> bool {
    value
        .first_unset()
        .inspect(|path| assert!(path.is_root(), "leaves report the root path"))
        .is_some()
}

#[rstest]
fn scalars_compare_with_their_default() {
    assert!(is_unset(&0_i32));
    assert!(!is_unset(&-3_i64));
    assert!(is_unset(&0_usize));
    assert!(is_unset(&0.0_f64));
    assert!(!is_unset(&0.5_f32));
    assert!(is_unset(&false));
    assert!(!is_unset(&true));
    assert!(is_unset(&'\0'));
    assert!(!is_unset(&'x'));
    assert!(is_unset(&Duration::ZERO));
    assert!(!is_unset(&Duration::from_secs(30)));
}

#[rstest]
fn text_and_paths_are_unset_when_empty() {
    assert!(is_unset(&String::new()));
    assert!(!is_unset(&String::from("x")));
    assert!(is_unset(&PathBuf::new()));
    assert!(!is_unset(&PathBuf::from("/srv")));
    assert!(is_unset(&Box::new(String::new())));
}

#[rstest]
fn collections_are_unset_only_when_empty() {
    assert!(is_unset(&Vec::<u8>::new()));
    assert!(!is_unset(&vec![0_u8]));
    assert!(is_unset(&HashMap::<String, u8>::new()));
    assert!(!is_unset(&BTreeMap::from([(1_u8, 0_u8)])));
}

#[rstest]
#[case::none(None, true)]
#[case::some_zero(Some(0), true)]
#[case::some(Some(7), false)]
fn options_defer_to_their_value(#[case] value: Option<u8>, #[case] unset: bool) {
    assert_eq!(is_unset(&value), unset);
}

#[rstest]
fn borrowed_strings_are_leaves() {
    assert!(!"".is_complete());
    assert!("db.local".is_complete());
    assert!(!std::path::Path::new("").is_complete());
}

#[rstest]
fn validate_reports_root_for_unset_leaf() {
    let err = validate(&0_u16).expect_err("zero is unset");
    let field = err.unset_field().expect("incomplete error");
    assert!(field.is_root());
    assert_eq!(
        err.to_string(),
        "field '<root>' in the configuration must not be empty"
    );
}
