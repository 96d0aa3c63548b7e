/*!
 * Cue list validation.
 *
 * Checks the invariants a final cue list must hold before it is stored or
 * serialized. Pipeline output always passes; the checks exist for cue lists
 * that were edited by hand or imported from a file.
 *
 * - `cues`: per-cue and cross-cue checks
 */

pub mod cues;

pub use cues::{CueIssue, CueResult, CueValidationResult, CueValidator};
