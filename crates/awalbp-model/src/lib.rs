// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # AWALBP Model
//!
//! **The instance model for assembly line balancing with accessibility
//! windows (AWALBP).**
//!
//! This crate reads the fixed-grammar, whitespace-delimited parameter files
//! describing AWALBP instances and turns them into a validated, immutable
//! record. It serves as the data interchange layer between the problem
//! definition (parameter files) and downstream optimization code.
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation of concerns between
//! **loading**, **construction**, and **consumption**:
//!
//! * **`index`**: Strongly-typed wrappers (`TaskIndex`, `StationIndex`) to
//!   prevent logical indexing errors between the two index spaces of an
//!   instance.
//! * **`window`**: The per-workstation accessibility window, a closed integer
//!   interval bounding allowable positions.
//! * **`instance`**: The `Instance` (immutable, validated record) and
//!   `InstanceBuilder` (mutable, validating) pair, plus the canonical field
//!   name table of the file format.
//! * **`loading`**: The `InstanceLoader`, which tokenizes a text resource,
//!   demultiplexes the count-dependent sections by position, and rejects
//!   malformed or inconsistent files with descriptive errors.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Indices are distinct types; per-workstation task
//!     lists are an ordered collection addressed by `StationIndex` rather
//!     than string-keyed lookups.
//! 2.  **Fail-Fast**: A file is either mapped and fully validated, or the
//!     conversion aborts with an error naming the source and the offending
//!     quantity. No partial record is ever returned.
//! 3.  **Immutability**: A built `Instance` is read-only; all consumers see
//!     the same validated data.

pub mod index;
pub mod instance;
pub mod loading;
pub mod window;
