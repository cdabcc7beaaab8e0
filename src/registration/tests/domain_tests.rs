//! Unit tests for registration domain types.

use crate::registration::{
    domain::{AddressError, ServiceAddress, ServiceIdentity, ServiceRegistration},
    ports::{RegistratorError, RegistratorOperation},
};
use rstest::rstest;

// ── ServiceIdentity ────────────────────────────────────────────────

#[rstest]
#[case("worker1")]
#[case("")]
#[case("svc-worker_1")]
fn identifier_without_separator_is_name_and_id(#[case] raw: &str) {
    let identity = ServiceIdentity::parse(raw);
    assert_eq!(identity.name(), raw);
    assert_eq!(identity.id(), None);
    assert_eq!(identity.effective_id(), raw);
}

#[rstest]
#[case("svc.worker1", "svc")]
#[case("svc.eu.worker1", "svc")]
#[case("svc.", "svc")]
#[case(".worker1", "")]
fn identifier_splits_on_first_separator_only(#[case] raw: &str, #[case] name: &str) {
    let identity = ServiceIdentity::parse(raw);
    assert_eq!(identity.name(), name);
    assert_eq!(identity.id(), Some(raw));
    assert_eq!(identity.to_string(), raw);
}

// ── ServiceAddress ─────────────────────────────────────────────────

#[rstest]
#[case("10.0.0.1:5001", "10.0.0.1", 5001)]
#[case("localhost:80", "localhost", 80)]
#[case("[::1]:8080", "::1", 8080)]
#[case("[fe80::1%eth0]:443", "fe80::1%eth0", 443)]
#[case(":9000", "", 9000)]
#[case("host:+42", "host", 42)]
#[case("host:0", "host", 0)]
#[case("host:65535", "host", 65535)]
fn valid_addresses_are_split(#[case] raw: &str, #[case] host: &str, #[case] port: u16) {
    let address = ServiceAddress::parse(raw).expect("valid address");
    assert_eq!(address.host(), host);
    assert_eq!(address.port(), port);
}

#[rstest]
#[case("10.0.0.1")]
#[case("[::1]")]
#[case("[::1]x:80")]
fn address_without_port_is_rejected(#[case] raw: &str) {
    assert!(matches!(
        ServiceAddress::parse(raw),
        Err(AddressError::MissingPort(_))
    ));
}

#[rstest]
#[case("::1:80")]
#[case("a:b:80")]
#[case("[::1]:a:80")]
fn unbracketed_colons_are_rejected(#[case] raw: &str) {
    assert!(matches!(
        ServiceAddress::parse(raw),
        Err(AddressError::TooManyColons(_))
    ));
}

#[rstest]
fn unclosed_bracket_is_rejected() {
    assert!(matches!(
        ServiceAddress::parse("[::1:80"),
        Err(AddressError::MissingBracket(_))
    ));
}

#[rstest]
#[case("a[b:80", '[')]
#[case("a]b:80", ']')]
#[case("[a[b]:80", '[')]
#[case("[::1]:8]0", ']')]
fn stray_brackets_are_rejected(#[case] raw: &str, #[case] bracket: char) {
    let result = ServiceAddress::parse(raw);
    assert!(
        matches!(result, Err(AddressError::UnexpectedBracket { bracket: found, .. }) if found == bracket),
        "expected unexpected '{bracket}' for {raw}, got {result:?}"
    );
}

#[rstest]
#[case("10.0.0.1:abc")]
#[case("10.0.0.1:")]
#[case("10.0.0.1:-1")]
#[case("10.0.0.1:65536")]
#[case("10.0.0.1: 80")]
fn non_numeric_or_out_of_range_port_is_rejected(#[case] raw: &str) {
    let result = ServiceAddress::parse(raw);
    assert!(
        matches!(result, Err(AddressError::InvalidPort { .. })),
        "expected invalid port for {raw}, got {result:?}"
    );
}

#[rstest]
#[case("10.0.0.1:5001")]
#[case("[::1]:8080")]
fn address_display_is_parseable(#[case] raw: &str) {
    let address = ServiceAddress::parse(raw).expect("valid address");
    assert_eq!(address.to_string(), raw);
}

// ── ServiceRegistration ────────────────────────────────────────────

#[rstest]
fn empty_address_records_no_location() {
    let registration = ServiceRegistration::new("worker1", "", &[]).expect("valid inputs");
    assert_eq!(registration.name(), "worker1");
    assert_eq!(registration.id(), None);
    assert_eq!(registration.effective_id(), "worker1");
    assert!(registration.address().is_none());
    assert!(registration.tags().is_empty());
}

#[rstest]
fn named_instance_records_location_and_tags() {
    let tags = vec!["production".to_owned(), "eu".to_owned()];
    let registration =
        ServiceRegistration::new("svc.worker1", "10.0.0.1:5001", &tags).expect("valid inputs");
    assert_eq!(registration.name(), "svc");
    assert_eq!(registration.id(), Some("svc.worker1"));
    let address = registration.address().expect("address recorded");
    assert_eq!(address.host(), "10.0.0.1");
    assert_eq!(address.port(), 5001);
    assert_eq!(registration.tags(), tags.as_slice());
}

// ── RegistratorError ───────────────────────────────────────────────

#[rstest]
#[case("10.0.0.1", RegistratorOperation::ExtractPort)]
#[case("a]:80", RegistratorOperation::ExtractPort)]
#[case("10.0.0.1:abc", RegistratorOperation::ParsePort)]
fn address_errors_map_to_operations(#[case] raw: &str, #[case] operation: RegistratorOperation) {
    let cause = ServiceAddress::parse(raw).expect_err("invalid address");
    let err = RegistratorError::from(cause.clone());
    assert_eq!(err.operation(), operation);
    assert_eq!(err.cause().downcast_ref::<AddressError>(), Some(&cause));
}

#[rstest]
fn registrator_error_display_leads_with_operation() {
    let err = RegistratorError::from(
        ServiceAddress::parse("10.0.0.1").expect_err("missing port"),
    );
    assert_eq!(
        err.to_string(),
        "extracting port: address 10.0.0.1: missing port in address"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[rstest]
#[case(RegistratorOperation::Connect, "connecting to consul")]
#[case(RegistratorOperation::ExtractPort, "extracting port")]
#[case(RegistratorOperation::ParsePort, "parsing port number")]
#[case(RegistratorOperation::Register, "registering service")]
#[case(RegistratorOperation::Deregister, "deregistering service")]
#[case(RegistratorOperation::Close, "closing registrator")]
fn operations_carry_context_phrases(
    #[case] operation: RegistratorOperation,
    #[case] expected: &str,
) {
    assert_eq!(operation.as_str(), expected);
    assert_eq!(operation.to_string(), expected);
}
