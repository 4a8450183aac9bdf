//! Networking for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` performs the single outbound POST; response classification is
//! done by `interactions::contact::SubmitOutcome`.

pub mod contact;
