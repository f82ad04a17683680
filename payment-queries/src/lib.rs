//! # Payment Queries
//!
//! Application service layer for the payment query service.
//!
//! The service is generic over `R: PaymentRepository` and
//! `C: DateTimeProvider`, allowing different record sources and clocks to
//! be injected - the real in-memory adapter in production wiring, stubs and
//! pinned clocks in tests.

pub mod service;


pub use service::PaymentQueryService;
