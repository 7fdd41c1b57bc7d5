//! Outbound communication: JSON POSTs to the owner's endpoint and `mailto:`
//! links for the mail-client fallback.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` defines the transport seam the contact and settings flows are
//! generic over; `mailto` builds the fallback link.

pub mod http;
pub mod mailto;
