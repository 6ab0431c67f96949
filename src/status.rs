//! Bidirectional registry of standard HTTP status codes and their
//! snake_case symbolic names (`200` ↔ `ok`, `404` ↔ `not_found`, ...).
//!
//! The registry is a single fixed table. Lookups that miss return
//! [`Error::UnknownStatus`] in **both** directions; callers that prefer
//! numeric passthrough for unknown codes handle the miss themselves
//! (the failure processor does exactly that).

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::errors::Error;

/// Standard HTTP status codes with their symbolic names.
const STATUS_TABLE: &[(u16, &str)] = &[
    (100, "continue"),
    (101, "switching_protocols"),
    (102, "processing"),
    (103, "early_hints"),
    (200, "ok"),
    (201, "created"),
    (202, "accepted"),
    (203, "non_authoritative_information"),
    (204, "no_content"),
    (205, "reset_content"),
    (206, "partial_content"),
    (207, "multi_status"),
    (208, "already_reported"),
    (226, "im_used"),
    (300, "multiple_choices"),
    (301, "moved_permanently"),
    (302, "found"),
    (303, "see_other"),
    (304, "not_modified"),
    (305, "use_proxy"),
    (307, "temporary_redirect"),
    (308, "permanent_redirect"),
    (400, "bad_request"),
    (401, "unauthorized"),
    (402, "payment_required"),
    (403, "forbidden"),
    (404, "not_found"),
    (405, "method_not_allowed"),
    (406, "not_acceptable"),
    (407, "proxy_authentication_required"),
    (408, "request_timeout"),
    (409, "conflict"),
    (410, "gone"),
    (411, "length_required"),
    (412, "precondition_failed"),
    (413, "payload_too_large"),
    (414, "uri_too_long"),
    (415, "unsupported_media_type"),
    (416, "range_not_satisfiable"),
    (417, "expectation_failed"),
    (421, "misdirected_request"),
    (422, "unprocessable_entity"),
    (423, "locked"),
    (424, "failed_dependency"),
    (425, "too_early"),
    (426, "upgrade_required"),
    (428, "precondition_required"),
    (429, "too_many_requests"),
    (431, "request_header_fields_too_large"),
    (451, "unavailable_for_legal_reasons"),
    (500, "internal_server_error"),
    (501, "not_implemented"),
    (502, "bad_gateway"),
    (503, "service_unavailable"),
    (504, "gateway_timeout"),
    (505, "http_version_not_supported"),
    (506, "variant_also_negotiates"),
    (507, "insufficient_storage"),
    (508, "loop_detected"),
    (509, "bandwidth_limit_exceeded"),
    (510, "not_extended"),
    (511, "network_authentication_required"),
];

lazy_static! {
    static ref CODE_TO_SYMBOL: HashMap<u16, &'static str> =
        STATUS_TABLE.iter().copied().collect();
    static ref SYMBOL_TO_CODE: HashMap<&'static str, u16> =
        STATUS_TABLE.iter().map(|&(code, sym)| (sym, code)).collect();
}

/// Resolves a numeric status code to its symbolic name.
pub fn symbol_for(code: u16) -> Result<&'static str, Error> {
    CODE_TO_SYMBOL
        .get(&code)
        .copied()
        .ok_or_else(|| Error::UnknownStatus(code.to_string()))
}

/// Resolves a symbolic name back to its numeric status code.
pub fn code_for(symbol: &str) -> Result<u16, Error> {
    SYMBOL_TO_CODE
        .get(symbol)
        .copied()
        .ok_or_else(|| Error::UnknownStatus(symbol.to_string()))
}
