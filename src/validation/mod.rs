/*!
 * Validation module for the household registration form.
 *
 * This module provides the client-side checks that run before a form
 * submission is allowed:
 * - Head section rules (names, birth date, mobile, address, marital
 *   status, wedding date, photo upload)
 * - Hobby list rule (first row only)
 * - Member row rules (every row)
 *
 * # Architecture
 *
 * - `context`: Plain value snapshot of a form's current state
 * - `head`: Validates the head-of-family section
 * - `hobbies`: Validates the hobby list
 * - `members`: Validates the additional-member rows
 * - `service`: Orchestrates all section validators
 */

pub mod context;
pub mod head;
pub mod hobbies;
pub mod members;
pub mod service;

// Re-export main types
pub use context::{FileValue, FormContext, HeadValues, HobbyRow, MemberRow};
pub use service::{FormValidator, ValidationConfig, ValidationReport};
