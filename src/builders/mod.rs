// This file is the module declaration file for the `builders` module.
// It declares and makes public the modules that produce and persist
// ignore-file content.

// `merge` module:
// Pure functions for duplicate detection (trimmed line match for entries,
// leading-characters match for templates) and for appending new content.
pub mod merge;

// `reporter` module:
// The `OutcomeReporter` trait and its `ConsoleReporter` implementation,
// which print the confirmation lines for a finished command.
pub mod reporter;

// `storage` module:
// The `IgnoreFileStore` trait with the filesystem-backed `FsStore` and the
// in-memory `MemoryStore` used by tests.
pub mod storage;

// `templates` module:
// The static registry of language templates embedded at build time.
pub mod templates;
