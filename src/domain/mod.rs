// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust structs, enums and traits that name the core
// concepts of the system.
//
// Rules for this layer:
//   - NO file I/O
//   - NO network maths
//   - Only plain data types, error kinds and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The opaque network description carried through every layer
pub mod architecture;

// A named, shuffled numeric table
pub mod dataset;

// Error kinds shared by every layer
pub mod error;

// Training / inference requests and their results
pub mod requests;

// Core abstractions (traits) that other layers implement
pub mod traits;
