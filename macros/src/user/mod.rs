// User-facing macros
//
// - concept_check: boolean expressions over concepts
// - instance_of: type constructor shape matching

pub mod concept_check;
pub mod instance_of;
