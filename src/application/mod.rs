// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to run one concatenation.
//
// Rules for this layer:
//   - No clap types here (that's Layer 1)
//   - No direct file writes (that's Layer 4)
//   - Only validation and workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The concatenation workflow
pub mod concat_use_case;
