/*!
 * # FamForm - Household Registration Form Validation
 *
 * A Rust library for client-side validation of a multi-section
 * household registration form.
 *
 * ## Features
 *
 * - Validate the head-of-family section, the hobby list and every
 *   additional-member row in a single pass
 * - Report every violation at once instead of stopping at the first
 * - Anchor error messages next to the offending input, with radio
 *   groups resolved through their wrapping container
 * - Clear stale annotations as the user edits, picks a file or flips
 *   a radio
 * - Apply server-side rejection responses back onto the form
 * - Configurable validation thresholds
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `form_page`: In-memory model of the rendered form page
 * - `fields`: Typed addressing of the form's inputs
 * - `events`: User interaction events and per-input clear rules
 * - `annotation`: The error reporting port and its test double
 * - `validation`: Section validators and the orchestrating service:
 *   - `validation::context`: Plain value snapshot of a form
 *   - `validation::head`: Head-of-family section rules
 *   - `validation::hobbies`: Hobby list rule
 *   - `validation::members`: Member row rules
 *   - `validation::service`: Runs all sections in one pass
 * - `submission`: Server response parsing and application
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Add other lints you want to allow but not auto-fix

// Public modules
pub mod annotation;
pub mod errors;
pub mod events;
pub mod fields;
pub mod form_page;
pub mod submission;
pub mod validation;

// Re-export main types for easier usage
pub use annotation::{ErrorSink, MemorySink};
pub use errors::{FormError, PageError, SubmissionError};
pub use events::{ClearRule, FormEvent};
pub use fields::{FieldRef, HeadField, MemberField};
pub use form_page::FormPage;
pub use submission::{SubmissionResponse, SubmitFollowUp};
pub use validation::{FormContext, FormValidator, ValidationConfig, ValidationReport};
