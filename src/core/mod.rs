// This file is the module declaration file for the `core` module.
// It declares the submodules that hold the tool's runtime pieces and exposes
// them to the rest of the crate.

// `config` module:
// Runtime settings for one invocation (`ToolConfig`): the working directory,
// the ignore-file name, the locator policy and the duplicate-check prefix
// length. Built from the command line; there is no config file.
pub mod config;

// `engine` module:
// `IgnoreEngine` runs the generate-template and add-path commands against an
// `IgnoreFileStore` and reports what happened as an `Outcome`.
pub mod engine;

// `error` module:
// The `IgnoreError` taxonomy shared by all library modules.
pub mod error;

// `locator` module:
// Finds the ignore-file, either by walking up from the working directory or
// by using the working directory only.
pub mod locator;

// `version` module:
// Build information printed by `-v`.
pub mod version;
