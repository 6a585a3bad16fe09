//! Integration tests for the reflective converter.

#![allow(missing_docs)]

use std::collections::HashMap;

use assert2::{check, let_assert};
use taqc::prelude::*;
use taqc::{TypeLocation, Value};

fn timestamp() -> DateTime<Utc> {
    let_assert!(Some(time) = DateTime::from_timestamp(1_700_000_000, 123_456_789));
    time
}

#[derive(Record)]
struct Example {
    #[taqc("foo")]
    foo: String,
    #[taqc("bar")]
    bar: Option<String>,
    #[taqc("buz")]
    buz: i64,
    #[taqc("qux")]
    qux: Vec<f64>,
    #[taqc("foobar")]
    foo_bar: bool,
    #[taqc("falsy")]
    falsy: bool,
    #[allow(dead_code)]
    should_be_ignored: String,
}

#[test]
fn converts_the_example_record() {
    let example = Example {
        foo: "string_value".to_string(),
        bar: None,
        buz: 123,
        qux: vec![123.456, 234.567],
        foo_bar: true,
        falsy: false,
        should_be_ignored: "should be ignored".to_string(),
    };

    let_assert!(Ok(query) = convert_to_query_params(Some(&example)));
    check!(query.encode() == "buz=123&foo=string_value&foobar=1&qux=123.456000&qux=234.567000");
    check!(!query.contains_key("bar"));
    check!(!query.contains_key("falsy"));
    check!(!query.contains_key("should_be_ignored"));
}

#[derive(Record)]
struct Scalars {
    #[taqc("foo")]
    foo: String,
    #[taqc("bar")]
    bar: i64,
    #[taqc("buz")]
    buz: f64,
    #[taqc("qux")]
    qux: bool,
}

#[test]
fn converts_scalars() {
    let scalars = Scalars {
        foo: "x".to_string(),
        bar: 123,
        buz: 456.789,
        qux: true,
    };

    let_assert!(Ok(query) = convert_to_query_params(Some(&scalars)));
    insta::assert_json_snapshot!(query, @r#"
    {
      "bar": [
        "123"
      ],
      "buz": [
        "456.789000"
      ],
      "foo": [
        "x"
      ],
      "qux": [
        "1"
      ]
    }
    "#);
}

#[test]
fn false_is_omitted() {
    let scalars = Scalars {
        foo: "x".to_string(),
        bar: 0,
        buz: 0.0,
        qux: false,
    };

    let_assert!(Ok(query) = convert_to_query_params(Some(&scalars)));
    check!(!query.contains_key("qux"));
    check!(query.get("bar") == Some("0"));
    check!(query.get("buz") == Some("0.000000"));
}

#[test]
fn nil_record() {
    let missing: Option<&Scalars> = None;
    check!(convert_to_query_params(missing) == Err(Error::NilValue));
}

#[derive(Record)]
struct Pointers<'a> {
    #[taqc("s")]
    s: Option<&'a str>,
    #[taqc("i")]
    i: Option<i64>,
    #[taqc("f")]
    f: Option<f64>,
    #[taqc("b")]
    b: Option<bool>,
    #[taqc("t, unixTimeUnit=millisec")]
    t: Option<DateTime<Utc>>,
}

#[test]
fn pointers_behave_like_their_pointee() {
    let present = Pointers {
        s: Some("text"),
        i: Some(-7),
        f: Some(1.5),
        b: Some(true),
        t: Some(timestamp()),
    };
    let_assert!(Ok(query) = convert_to_query_params(Some(&present)));
    check!(query.encode() == "b=1&f=1.500000&i=-7&s=text&t=1700000000123");

    let absent = Pointers {
        s: None,
        i: None,
        f: None,
        b: Some(false),
        t: None,
    };
    let_assert!(Ok(query) = convert_to_query_params(Some(&absent)));
    check!(query.is_empty());
}

#[derive(Record)]
struct Sequences {
    #[taqc("s")]
    s: Vec<String>,
    #[taqc("i")]
    i: Vec<i64>,
    #[taqc("t, timeLayout=%Y-%m-%d")]
    t: Vec<DateTime<Utc>>,
}

#[test]
fn sequences_keep_element_order() {
    let sequences = Sequences {
        s: vec!["c".to_string(), "a".to_string(), "b".to_string(), "a".to_string()],
        i: vec![3, 1, 2],
        t: vec![timestamp()],
    };

    let_assert!(Ok(query) = convert_to_query_params(Some(&sequences)));
    check!(query.get_all("s") == ["c", "a", "b", "a"]);
    check!(query.get_all("i") == ["3", "1", "2"]);
    check!(query.get_all("t") == ["2023-11-14"]);
}

#[derive(Record)]
struct Times {
    #[taqc("default")]
    default: DateTime<Utc>,
    #[taqc("sec, unixTimeUnit=sec")]
    sec: DateTime<Utc>,
    #[taqc("milli, unixTimeUnit=millisec")]
    milli: DateTime<Utc>,
    #[taqc("micro, unixTimeUnit=microsec")]
    micro: DateTime<Utc>,
    #[taqc("nano, unixTimeUnit=nanosec")]
    nano: DateTime<Utc>,
    #[taqc("layout, timeLayout=%Y-%m-%dT%H:%M:%S%:z")]
    layout: DateTime<FixedOffset>,
    #[taqc("both, unixTimeUnit=millisec, timeLayout=%H:%M")]
    both: DateTime<Utc>,
}

#[test]
fn time_formats() {
    let_assert!(Some(tokyo) = FixedOffset::east_opt(9 * 3600));
    let times = Times {
        default: timestamp(),
        sec: timestamp(),
        milli: timestamp(),
        micro: timestamp(),
        nano: timestamp(),
        layout: timestamp().with_timezone(&tokyo),
        both: timestamp(),
    };

    let_assert!(Ok(query) = convert_to_query_params(Some(&times)));
    check!(query.get("default") == Some("1700000000"));
    check!(query.get("sec") == Some("1700000000"));
    check!(query.get("milli") == Some("1700000000123"));
    check!(query.get("micro") == Some("1700000000123456"));
    check!(query.get("nano") == Some("1700000000123456789"));
    check!(query.get("layout") == Some("2023-11-15T07:13:20+09:00"));
    check!(query.get("both") == Some("22:13"));
}

#[derive(Record)]
struct EmptyKey {
    #[taqc("")]
    foo: String,
}

#[test]
fn empty_key() {
    let record = EmptyKey {
        foo: "x".to_string(),
    };
    check!(convert_to_query_params(Some(&record)) == Err(Error::EmptyKey));
}

#[derive(Record)]
struct BadUnit {
    #[taqc("foo, unixTimeUnit=hour")]
    foo: DateTime<Utc>,
}

#[test]
fn unsupported_unix_time_unit() {
    let record = BadUnit { foo: timestamp() };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(
        err == Error::UnsupportedUnixTimeUnit {
            value: "hour".to_string()
        }
    );
    check!(err.to_string() == "hour is unsupported: unsupported unix time unit has given");
}

#[derive(Record)]
struct UnformattableLayout {
    #[taqc("t, timeLayout=%Y-%m-%d %#z")]
    t: DateTime<Utc>,
}

#[test]
fn unformattable_time_layout() {
    let record = UnformattableLayout { t: timestamp() };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(
        err == Error::InvalidTimeLayout {
            layout: "%Y-%m-%d %#z".to_string()
        }
    );
}

/// A type without a conversion rule.
struct Pattern(#[allow(dead_code)] String);

impl Reflect for Pattern {
    fn reflect(&self) -> Value<'_> {
        Value::Opaque("Pattern")
    }
}

#[derive(Record)]
struct Unsupported {
    #[taqc("top")]
    top: Pattern,
}

#[derive(Record)]
struct UnsupportedPointer {
    #[taqc("pointer")]
    pointer: Option<Pattern>,
}

#[derive(Record)]
struct UnsupportedSequence {
    #[taqc("flags")]
    flags: Vec<bool>,
}

#[derive(Record)]
struct UnsupportedMap {
    #[taqc("map")]
    map: HashMap<String, String>,
}

#[test]
fn unsupported_field_types() {
    let record = Unsupported {
        top: Pattern("a+".to_string()),
    };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(err == Error::unsupported_field_type("Pattern", TypeLocation::TopLevel));
    check!(err.to_string() == "unsupported field type `Pattern` (top level)");

    let record = UnsupportedPointer {
        pointer: Some(Pattern("a+".to_string())),
    };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(err.to_string() == "unsupported field type `Option<Pattern>` (pointer)");

    let record = UnsupportedSequence { flags: vec![true] };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(err.to_string() == "unsupported field type `Vec<bool>` (sequence)");

    let record = UnsupportedMap {
        map: HashMap::new(),
    };
    let_assert!(Err(err) = convert_to_query_params(Some(&record)));
    check!(err.to_string() == "unsupported field type `HashMap` (top level)");
}

/// A regular-expression-like type which knows nothing about taqc.
struct Regexish {
    #[allow(dead_code)]
    source: String,
}

#[derive(Record)]
struct WithRegexish {
    #[taqc("name")]
    name: String,
    #[taqc("re")]
    re: Regexish,
    #[allow(dead_code)]
    untagged: Regexish,
}

#[test]
fn types_without_reflect_fail_at_conversion() {
    let record = WithRegexish {
        name: "x".to_string(),
        re: Regexish {
            source: "a+".to_string(),
        },
        untagged: Regexish {
            source: "b+".to_string(),
        },
    };
    let_assert!(Err(Error::UnsupportedFieldType { kind, location }) = convert_to_query_params(Some(&record)));
    check!(kind.ends_with("Regexish"));
    check!(location == TypeLocation::TopLevel);
}

#[test]
fn absent_or_empty_containers_are_not_checked() {
    let record = UnsupportedPointer { pointer: None };
    let_assert!(Ok(query) = convert_to_query_params(Some(&record)));
    check!(query.is_empty());

    let record = UnsupportedSequence { flags: vec![] };
    let_assert!(Ok(query) = convert_to_query_params(Some(&record)));
    check!(query.is_empty());
}

#[test]
fn appends_to_url() {
    let scalars = Scalars {
        foo: "a b".to_string(),
        bar: 1,
        buz: 2.0,
        qux: false,
    };
    let_assert!(Ok(query) = convert_to_query_params(Some(&scalars)));
    let_assert!(Ok(mut url) = taqc::url::Url::parse("https://example.com/search?page=2"));
    query.append_to_url(&mut url);
    check!(url.as_str() == "https://example.com/search?page=2&bar=1&buz=2.000000&foo=a+b");
}
