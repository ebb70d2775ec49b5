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

use awalbp_core::utils::index::{TypedIndex, TypedIndexTag};

/// A tag type for task indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TaskIndexTag;

impl TypedIndexTag for TaskIndexTag {
    const NAME: &'static str = "TaskIndex";
}

/// A typed index for tasks. Zero-based; task `k` of the file format (1-based)
/// is `TaskIndex::new(k - 1)`.
pub type TaskIndex = TypedIndex<TaskIndexTag>;

/// A tag type for workstation indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StationIndexTag;

impl TypedIndexTag for StationIndexTag {
    const NAME: &'static str = "StationIndex";
}

/// A typed index for workstations. Zero-based; workstation `k` of the file
/// format (1-based) is `StationIndex::new(k - 1)`.
pub type StationIndex = TypedIndex<StationIndexTag>;
