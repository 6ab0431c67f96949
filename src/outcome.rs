//! Outcome types produced by the processing pipeline.

use serde_json::Value;

use crate::structmap::{Mapped, StructValue};

/// A status label, either symbolic (`"bad_request"`) or numeric (`400`),
/// depending on the `symbol_status` configuration flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusTag {
    Symbol(String),
    Code(u16),
}

impl StatusTag {
    pub fn symbol<S: Into<String>>(s: S) -> Self {
        StatusTag::Symbol(s.into())
    }
}

/// The payload carried by a bare or wrapped success outcome.
#[derive(Debug)]
pub enum Payload {
    /// A parsed (and possibly extracted) value, no struct mapping applied.
    Value(Value),
    /// One mapped struct instance.
    One(Box<dyn StructValue>),
    /// One mapped struct instance per sequence element, order preserving.
    Many(Vec<Box<dyn StructValue>>),
}

impl Payload {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Payload::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn downcast_one<T: std::any::Any>(&self) -> Option<&T> {
        match self {
            Payload::One(instance) => instance.downcast_ref::<T>(),
            _ => None,
        }
    }

    pub fn downcast_many<T: std::any::Any>(&self) -> Option<Vec<&T>> {
        match self {
            Payload::Many(instances) => {
                instances.iter().map(|i| i.downcast_ref::<T>()).collect()
            }
            _ => None,
        }
    }
}

impl From<Mapped> for Payload {
    fn from(mapped: Mapped) -> Self {
        match mapped {
            Mapped::One(instance) => Payload::One(instance),
            Mapped::Many(instances) => Payload::Many(instances),
            Mapped::Skipped(value) => Payload::Value(value),
        }
    }
}

/// The failure half of a wrapped outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureReport {
    /// Configured default error, or the parsed body's `error` field, or the
    /// whole parsed body.
    pub error: Value,
    /// Configured default key, or the parsed body's `error_key` field.
    /// The key is symbol-like: a non-string `error_key` in the body is
    /// treated as absent.
    pub error_key: Option<String>,
    /// Resolved status label.
    pub status: StatusTag,
}

/// What a processing call hands back to the caller.
#[derive(Debug)]
pub enum Processed<R> {
    /// The original response, untouched (`raw_response` short-circuit).
    Raw(R),
    /// A bare value (`monad` off).
    Value(Payload),
    /// A wrapped success (`monad` on, status < 400).
    Success(Payload),
    /// A wrapped failure (`monad` on, status >= 400).
    Failure(FailureReport),
}

impl<R> Processed<R> {
    pub fn is_raw(&self) -> bool {
        matches!(self, Processed::Raw(_))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Processed::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Processed::Failure(_))
    }

    /// The payload of a bare or wrapped success outcome.
    pub fn payload(&self) -> Option<&Payload> {
        match self {
            Processed::Value(p) | Processed::Success(p) => Some(p),
            _ => None,
        }
    }

    /// The report of a wrapped failure outcome.
    pub fn failure(&self) -> Option<&FailureReport> {
        match self {
            Processed::Failure(report) => Some(report),
            _ => None,
        }
    }
}

/// Handler verdict, before the dispatcher rehydrates the response value.
///
/// Handlers work against `&dyn Response` and cannot carry the concrete
/// response type, so the raw short-circuit is a marker the dispatcher turns
/// back into [`Processed::Raw`] with the response it owns.
#[derive(Debug)]
pub enum Verdict {
    Raw,
    Value(Payload),
    Success(Payload),
    Failure(FailureReport),
}
