// Test modules for the quip crate
//
// Each source file has a corresponding test file that focuses on
// business logic verification.
