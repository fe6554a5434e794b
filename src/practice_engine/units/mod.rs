//! Unit generators grouped by the kind of numbers they work with.
//!
//! Every public generator has the shape
//!
//! ```ignore
//! pub fn generate_<unit><R: Rng>(rng: &mut R [, lang: &Localizer<'_>]) -> Problem
//! ```
//!
//! and is paired with a deterministic builder that takes the drawn values,
//! so fixed scenarios can be tested without an RNG. The generator dispatches
//! to these via `generator.rs`.

/// AS, MD, OO
pub mod arithmetic;
/// FD, FO, DO
pub mod fractions;
/// VE, LE, IQ, PW, AO
pub mod algebra;
/// MX
pub mod mixed;
