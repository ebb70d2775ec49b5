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

//! The validated AWALBP instance record.
//!
//! An `Instance` holds the contents of one parameter file as named, typed
//! fields: the two counts, the per-workstation accessibility windows, four
//! workpiece scalars, the task identifier list, one task list per
//! workstation, and the two trailing per-task vectors. Per-workstation task
//! lists are an ordered collection addressed by `StationIndex` rather than
//! synthetic string keys; the string keys of the file format
//! (`workstation_tasks_1`, `workstation_tasks_2`, ...) appear only in the
//! serialized form consumed by downstream tooling.
//!
//! Construction goes through `InstanceBuilder`, whose `build` runs the four
//! semantic consistency checks of the file format in a fixed order and
//! refuses to produce an instance that violates any of them.

use crate::index::{StationIndex, TaskIndex};
use crate::window::AccessibilityWindow;
use awalbp_core::math::triangular::triangular;
use num_traits::{PrimInt, Signed};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The canonical field names of the instance file format, in file order.
///
/// The first nine entries name the fixed leading lines, the tenth is the
/// prefix of the repeating per-workstation lines (completed with a 1-based
/// workstation number), and the last two name the trailing lines.
pub const FIELD_NAMES: [&str; 12] = [
    "number_of_tasks",
    "number_of_workstations",
    "accessibility_window_L",
    "accessibility_window_R",
    "size_of_workpiece_horizontal",
    "distance_between_right_borders",
    "intermediate_time_between_stages",
    "elementary_step_length",
    "tasks",
    "workstation_tasks_",
    "task_processing_time",
    "distance_to_right_border_of_workpiece",
];

/// Widens a primitive integer to `i128` for error reporting and checksum
/// arithmetic. Lossless for every signed primitive the crate works with.
#[inline(always)]
pub(crate) fn widen<T>(value: T) -> i128
where
    T: PrimInt,
{
    value.to_i128().unwrap_or_default()
}

/// The error type for failed instance validation.
///
/// Carries one of the four consistency violations of the file format and,
/// when produced by the loader, the origin of the offending input (typically
/// the file path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    origin: Option<String>,
    kind: ValidationErrorKind,
}

/// The four consistency checks an instance can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The accessibility window lines do not both have one entry per
    /// workstation.
    WindowCount {
        expected: usize,
        left: usize,
        right: usize,
    },
    /// The workstation task lists do not sum to the assignment checksum
    /// `number_of_tasks * (number_of_tasks + 1) / 2`. A positive remainder
    /// means tasks are missing from the assignment; a negative remainder
    /// means values were assigned more than once or out of range.
    UnassignedTasks { remaining: i128 },
    /// The number of workstation task lists differs from the declared
    /// workstation count.
    WorkstationCount { expected: usize, observed: usize },
    /// A distance to the right border of the workpiece lies outside
    /// `[0, size_of_workpiece_horizontal]`.
    BorderDistance { value: i128, bound: i128 },
}

impl ValidationError {
    #[inline]
    pub(crate) fn new(kind: ValidationErrorKind) -> Self {
        Self { origin: None, kind }
    }

    /// Attaches the input origin (e.g., a file path) to the error.
    #[inline]
    pub(crate) fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Returns the violated consistency check.
    #[inline]
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Returns the origin of the offending input, if one was attached.
    #[inline]
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowCount {
                expected,
                left,
                right,
            } => write!(
                f,
                "expected {} accessibility windows, but got {} for L and {} for R",
                expected, left, right
            ),
            Self::UnassignedTasks { remaining } => write!(
                f,
                "incomplete task assignment: workstation task lines leave a checksum remainder of {}",
                remaining
            ),
            Self::WorkstationCount { expected, observed } => write!(
                f,
                "expected {} workstation task lines, but found {}",
                expected, observed
            ),
            Self::BorderDistance { value, bound } => write!(
                f,
                "invalid distance to right border of workpiece: {}, must be between 0 and {}",
                value, bound
            ),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{}: {}", origin, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ValidationError {}

/// The immutable, validated record of one AWALBP parameter file.
///
/// Field meanings follow the file format: one accessibility window per
/// workstation, four workpiece geometry/timing scalars, the task identifier
/// list, one task list per workstation, and two per-task trailing vectors.
///
/// Construction:
/// - Use `InstanceBuilder` and call `InstanceBuilder::build`, or load a file
///   through `loading::InstanceLoader`.
#[derive(Clone, PartialEq, Eq)]
pub struct Instance<T>
where
    T: PrimInt + Signed,
{
    num_tasks: usize,
    num_workstations: usize,
    window_left: Vec<T>,  // len = num_workstations
    window_right: Vec<T>, // len = num_workstations
    size_of_workpiece_horizontal: T,
    distance_between_right_borders: T,
    intermediate_time_between_stages: T,
    elementary_step_length: T,
    tasks: Vec<T>,
    workstation_tasks: Vec<Vec<T>>, // len = num_workstations
    task_processing_times: Vec<T>,
    border_distances: Vec<T>,
}

impl<T> Instance<T>
where
    T: PrimInt + Signed,
{
    /// Returns the number of tasks in the instance.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Returns the number of workstations in the instance.
    #[inline]
    pub fn num_workstations(&self) -> usize {
        self.num_workstations
    }

    /// Returns the accessibility window of the specified workstation.
    ///
    /// # Panics
    ///
    /// Panics if `station_index` is not in `0..num_workstations()`.
    #[inline]
    pub fn accessibility_window(&self, station_index: StationIndex) -> AccessibilityWindow<T> {
        let index = station_index.get();
        debug_assert!(
            index < self.num_workstations(),
            "called `Instance::accessibility_window` with station index out of bounds: the len is {} but the index is {}",
            self.num_workstations(),
            index
        );

        AccessibilityWindow::new(self.window_left[index], self.window_right[index])
    }

    /// Returns a slice of the left accessibility window endpoints.
    #[inline]
    pub fn accessibility_windows_left(&self) -> &[T] {
        &self.window_left
    }

    /// Returns a slice of the right accessibility window endpoints.
    #[inline]
    pub fn accessibility_windows_right(&self) -> &[T] {
        &self.window_right
    }

    /// Returns the horizontal size of the workpiece.
    #[inline]
    pub fn size_of_workpiece_horizontal(&self) -> T {
        self.size_of_workpiece_horizontal
    }

    /// Returns the distance between right borders of consecutive stages.
    #[inline]
    pub fn distance_between_right_borders(&self) -> T {
        self.distance_between_right_borders
    }

    /// Returns the intermediate time between stages.
    #[inline]
    pub fn intermediate_time_between_stages(&self) -> T {
        self.intermediate_time_between_stages
    }

    /// Returns the elementary step length of workpiece movement.
    #[inline]
    pub fn elementary_step_length(&self) -> T {
        self.elementary_step_length
    }

    /// Returns the task identifier list.
    #[inline]
    pub fn tasks(&self) -> &[T] {
        &self.tasks
    }

    /// Returns the task list of the specified workstation.
    ///
    /// # Panics
    ///
    /// Panics if `station_index` is not in `0..num_workstations()`.
    #[inline]
    pub fn workstation_tasks(&self, station_index: StationIndex) -> &[T] {
        let index = station_index.get();
        debug_assert!(
            index < self.num_workstations(),
            "called `Instance::workstation_tasks` with station index out of bounds: the len is {} but the index is {}",
            self.num_workstations(),
            index
        );

        &self.workstation_tasks[index]
    }

    /// Returns all per-workstation task lists in workstation order.
    #[inline]
    pub fn workstation_task_lists(&self) -> &[Vec<T>] {
        &self.workstation_tasks
    }

    /// Returns the processing time of the specified task.
    ///
    /// # Panics
    ///
    /// Panics if `task_index` is not in `0..task_processing_times().len()`.
    #[inline]
    pub fn task_processing_time(&self, task_index: TaskIndex) -> T {
        let index = task_index.get();
        debug_assert!(
            index < self.task_processing_times.len(),
            "called `Instance::task_processing_time` with task index out of bounds: the len is {} but the index is {}",
            self.task_processing_times.len(),
            index
        );

        self.task_processing_times[index]
    }

    /// Returns a slice of all task processing times.
    #[inline]
    pub fn task_processing_times(&self) -> &[T] {
        &self.task_processing_times
    }

    /// Returns the distance of the specified task to the right border of the
    /// workpiece.
    ///
    /// # Panics
    ///
    /// Panics if `task_index` is not in `0..border_distances().len()`.
    #[inline]
    pub fn distance_to_right_border(&self, task_index: TaskIndex) -> T {
        let index = task_index.get();
        debug_assert!(
            index < self.border_distances.len(),
            "called `Instance::distance_to_right_border` with task index out of bounds: the len is {} but the index is {}",
            self.border_distances.len(),
            index
        );

        self.border_distances[index]
    }

    /// Returns a slice of all distances to the right border of the workpiece.
    #[inline]
    pub fn border_distances(&self) -> &[T] {
        &self.border_distances
    }
}

impl<T> std::fmt::Debug for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instance")
            .field("num_tasks", &self.num_tasks)
            .field("num_workstations", &self.num_workstations)
            .field("window_left", &self.window_left)
            .field("window_right", &self.window_right)
            .field(
                "size_of_workpiece_horizontal",
                &self.size_of_workpiece_horizontal,
            )
            .field(
                "distance_between_right_borders",
                &self.distance_between_right_borders,
            )
            .field(
                "intermediate_time_between_stages",
                &self.intermediate_time_between_stages,
            )
            .field("elementary_step_length", &self.elementary_step_length)
            .field("tasks", &self.tasks)
            .field("workstation_tasks", &self.workstation_tasks)
            .field("task_processing_times", &self.task_processing_times)
            .field("border_distances", &self.border_distances)
            .finish()
    }
}

impl<T> std::fmt::Display for Instance<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Instance(num_tasks: {}, num_workstations: {})",
            self.num_tasks, self.num_workstations
        )
    }
}

/// Serializes the instance as the flat string-keyed mapping consumed by
/// downstream tooling: every field name maps to an integer array (scalar
/// fields become one-element arrays), and each workstation task list appears
/// under a synthetic `workstation_tasks_<k>` key with a 1-based `k`.
impl<T> Serialize for Instance<T>
where
    T: PrimInt + Signed + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let num_entries = FIELD_NAMES.len() - 1 + self.num_workstations;
        let mut map = serializer.serialize_map(Some(num_entries))?;

        map.serialize_entry(FIELD_NAMES[0], &[self.num_tasks])?;
        map.serialize_entry(FIELD_NAMES[1], &[self.num_workstations])?;
        map.serialize_entry(FIELD_NAMES[2], &self.window_left)?;
        map.serialize_entry(FIELD_NAMES[3], &self.window_right)?;
        map.serialize_entry(
            FIELD_NAMES[4],
            std::slice::from_ref(&self.size_of_workpiece_horizontal),
        )?;
        map.serialize_entry(
            FIELD_NAMES[5],
            std::slice::from_ref(&self.distance_between_right_borders),
        )?;
        map.serialize_entry(
            FIELD_NAMES[6],
            std::slice::from_ref(&self.intermediate_time_between_stages),
        )?;
        map.serialize_entry(
            FIELD_NAMES[7],
            std::slice::from_ref(&self.elementary_step_length),
        )?;
        map.serialize_entry(FIELD_NAMES[8], &self.tasks)?;

        for (station, task_list) in self.workstation_tasks.iter().enumerate() {
            let key = format!("{}{}", FIELD_NAMES[9], station + 1);
            map.serialize_entry(&key, task_list)?;
        }

        map.serialize_entry(FIELD_NAMES[10], &self.task_processing_times)?;
        map.serialize_entry(FIELD_NAMES[11], &self.border_distances)?;
        map.end()
    }
}

/// A mutable builder for `Instance`, optimized for incremental assembly.
///
/// The builder accepts raw field data exactly as it appears in a parameter
/// file, without length checks; all consistency checking happens in `build`,
/// so a file whose accessibility window lines disagree with the declared
/// workstation count is representable here and rejected there.
///
/// # Examples
///
/// ```rust
/// # use awalbp_model::instance::InstanceBuilder;
///
/// let mut builder = InstanceBuilder::<i64>::new(2, 1);
/// builder
///     .set_accessibility_windows_left(vec![0])
///     .set_accessibility_windows_right(vec![5])
///     .set_size_of_workpiece_horizontal(10)
///     .set_tasks(vec![1, 2])
///     .push_workstation_tasks(vec![1, 2])
///     .set_task_processing_times(vec![3, 4])
///     .set_border_distances(vec![2, 1]);
/// let instance = builder.build().expect("valid instance");
/// assert_eq!(instance.num_tasks(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct InstanceBuilder<T>
where
    T: PrimInt + Signed,
{
    num_tasks: usize,
    num_workstations: usize,
    window_left: Vec<T>,
    window_right: Vec<T>,
    size_of_workpiece_horizontal: T,
    distance_between_right_borders: T,
    intermediate_time_between_stages: T,
    elementary_step_length: T,
    tasks: Vec<T>,
    workstation_tasks: Vec<Vec<T>>,
    task_processing_times: Vec<T>,
    border_distances: Vec<T>,
}

impl<T> InstanceBuilder<T>
where
    T: PrimInt + Signed,
{
    /// Creates a new `InstanceBuilder` for the given dimensions with all
    /// fields empty or zero.
    pub fn new(num_tasks: usize, num_workstations: usize) -> Self {
        Self {
            num_tasks,
            num_workstations,
            window_left: Vec::new(),
            window_right: Vec::new(),
            size_of_workpiece_horizontal: T::zero(),
            distance_between_right_borders: T::zero(),
            intermediate_time_between_stages: T::zero(),
            elementary_step_length: T::zero(),
            tasks: Vec::new(),
            workstation_tasks: Vec::new(),
            task_processing_times: Vec::new(),
            border_distances: Vec::new(),
        }
    }

    /// Returns the number of tasks the instance is declared to have.
    #[inline]
    pub fn num_tasks(&self) -> usize {
        self.num_tasks
    }

    /// Returns the number of workstations the instance is declared to have.
    #[inline]
    pub fn num_workstations(&self) -> usize {
        self.num_workstations
    }

    /// Sets the left accessibility window endpoints, one per workstation.
    #[inline]
    pub fn set_accessibility_windows_left(&mut self, endpoints: Vec<T>) -> &mut Self {
        self.window_left = endpoints;
        self
    }

    /// Sets the right accessibility window endpoints, one per workstation.
    #[inline]
    pub fn set_accessibility_windows_right(&mut self, endpoints: Vec<T>) -> &mut Self {
        self.window_right = endpoints;
        self
    }

    /// Sets the horizontal size of the workpiece.
    #[inline]
    pub fn set_size_of_workpiece_horizontal(&mut self, value: T) -> &mut Self {
        self.size_of_workpiece_horizontal = value;
        self
    }

    /// Sets the distance between right borders of consecutive stages.
    #[inline]
    pub fn set_distance_between_right_borders(&mut self, value: T) -> &mut Self {
        self.distance_between_right_borders = value;
        self
    }

    /// Sets the intermediate time between stages.
    #[inline]
    pub fn set_intermediate_time_between_stages(&mut self, value: T) -> &mut Self {
        self.intermediate_time_between_stages = value;
        self
    }

    /// Sets the elementary step length of workpiece movement.
    #[inline]
    pub fn set_elementary_step_length(&mut self, value: T) -> &mut Self {
        self.elementary_step_length = value;
        self
    }

    /// Sets the task identifier list.
    #[inline]
    pub fn set_tasks(&mut self, tasks: Vec<T>) -> &mut Self {
        self.tasks = tasks;
        self
    }

    /// Appends the task list of the next workstation, in workstation order.
    #[inline]
    pub fn push_workstation_tasks(&mut self, task_list: Vec<T>) -> &mut Self {
        self.workstation_tasks.push(task_list);
        self
    }

    /// Sets the per-task processing times.
    #[inline]
    pub fn set_task_processing_times(&mut self, times: Vec<T>) -> &mut Self {
        self.task_processing_times = times;
        self
    }

    /// Sets the per-task distances to the right border of the workpiece.
    #[inline]
    pub fn set_border_distances(&mut self, distances: Vec<T>) -> &mut Self {
        self.border_distances = distances;
        self
    }

    /// Validates the accumulated fields and builds the `Instance`.
    ///
    /// The four consistency checks run in a fixed order, each failing
    /// independently:
    ///
    /// 1. Both accessibility window lines have exactly one entry per
    ///    workstation.
    /// 2. The values of all workstation task lists sum to the assignment
    ///    checksum `num_tasks * (num_tasks + 1) / 2`.
    /// 3. The number of workstation task lists equals the declared
    ///    workstation count.
    /// 4. Every distance to the right border of the workpiece lies in
    ///    `[0, size_of_workpiece_horizontal]`.
    pub fn build(self) -> Result<Instance<T>, ValidationError> {
        if self.window_left.len() != self.num_workstations
            || self.window_right.len() != self.num_workstations
        {
            return Err(ValidationError::new(ValidationErrorKind::WindowCount {
                expected: self.num_workstations,
                left: self.window_left.len(),
                right: self.window_right.len(),
            }));
        }

        // Saturation only matters for dimensions near the integer limits,
        // where the checksum cannot match any real file content anyway.
        let checksum = triangular(self.num_tasks as i128).unwrap_or(i128::MAX);
        let assigned = self
            .workstation_tasks
            .iter()
            .flatten()
            .fold(0i128, |acc, &value| acc.saturating_add(widen(value)));
        let remaining = checksum.saturating_sub(assigned);
        if remaining != 0 {
            return Err(ValidationError::new(ValidationErrorKind::UnassignedTasks {
                remaining,
            }));
        }

        if self.workstation_tasks.len() != self.num_workstations {
            return Err(ValidationError::new(
                ValidationErrorKind::WorkstationCount {
                    expected: self.num_workstations,
                    observed: self.workstation_tasks.len(),
                },
            ));
        }

        let bound = self.size_of_workpiece_horizontal;
        for &distance in &self.border_distances {
            if distance < T::zero() || distance > bound {
                return Err(ValidationError::new(ValidationErrorKind::BorderDistance {
                    value: widen(distance),
                    bound: widen(bound),
                }));
            }
        }

        Ok(Instance {
            num_tasks: self.num_tasks,
            num_workstations: self.num_workstations,
            window_left: self.window_left,
            window_right: self.window_right,
            size_of_workpiece_horizontal: self.size_of_workpiece_horizontal,
            distance_between_right_borders: self.distance_between_right_borders,
            intermediate_time_between_stages: self.intermediate_time_between_stages,
            elementary_step_length: self.elementary_step_length,
            tasks: self.tasks,
            workstation_tasks: self.workstation_tasks,
            task_processing_times: self.task_processing_times,
            border_distances: self.border_distances,
        })
    }
}

impl<T> std::fmt::Display for InstanceBuilder<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InstanceBuilder(num_tasks: {}, num_workstations: {})",
            self.num_tasks, self.num_workstations
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(i: usize) -> StationIndex {
        StationIndex::new(i)
    }
    fn t(i: usize) -> TaskIndex {
        TaskIndex::new(i)
    }

    /// A fully populated builder for a valid two-task, one-workstation
    /// instance.
    fn minimal_builder() -> InstanceBuilder<i64> {
        let mut builder = InstanceBuilder::new(2, 1);
        builder
            .set_accessibility_windows_left(vec![0])
            .set_accessibility_windows_right(vec![5])
            .set_size_of_workpiece_horizontal(10)
            .set_distance_between_right_borders(3)
            .set_intermediate_time_between_stages(2)
            .set_elementary_step_length(1)
            .set_tasks(vec![1, 2])
            .push_workstation_tasks(vec![1, 2])
            .set_task_processing_times(vec![3, 4])
            .set_border_distances(vec![2, 1]);
        builder
    }

    #[test]
    fn test_build_valid_instance() {
        let instance = minimal_builder().build().expect("instance should build");

        assert_eq!(instance.num_tasks(), 2);
        assert_eq!(instance.num_workstations(), 1);
        assert_eq!(instance.accessibility_windows_left(), &[0]);
        assert_eq!(instance.accessibility_windows_right(), &[5]);
        assert_eq!(instance.size_of_workpiece_horizontal(), 10);
        assert_eq!(instance.distance_between_right_borders(), 3);
        assert_eq!(instance.intermediate_time_between_stages(), 2);
        assert_eq!(instance.elementary_step_length(), 1);
        assert_eq!(instance.tasks(), &[1, 2]);
        assert_eq!(instance.workstation_tasks(s(0)), &[1, 2]);
        assert_eq!(instance.workstation_task_lists().len(), 1);
        assert_eq!(instance.task_processing_times(), &[3, 4]);
        assert_eq!(instance.border_distances(), &[2, 1]);
        assert_eq!(instance.task_processing_time(t(1)), 4);
        assert_eq!(instance.distance_to_right_border(t(0)), 2);
    }

    #[test]
    fn test_accessibility_window_accessor() {
        let instance = minimal_builder().build().unwrap();
        let window = instance.accessibility_window(s(0));
        assert_eq!(window.left(), 0);
        assert_eq!(window.right(), 5);
        assert!(window.contains_point(3));
    }

    #[test]
    fn test_window_count_mismatch() {
        let mut builder = minimal_builder();
        builder.set_accessibility_windows_left(vec![]);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::WindowCount {
                expected: 1,
                left: 0,
                right: 1
            }
        );
        assert_eq!(err.origin(), None);
    }

    #[test]
    fn test_unassigned_remainder() {
        let mut builder = InstanceBuilder::<i64>::new(3, 1);
        builder
            .set_accessibility_windows_left(vec![0])
            .set_accessibility_windows_right(vec![5])
            .set_size_of_workpiece_horizontal(10)
            .set_tasks(vec![1, 2, 3])
            .push_workstation_tasks(vec![1, 2]) // remainder 6 - 3 = 3
            .set_task_processing_times(vec![1, 1, 1])
            .set_border_distances(vec![0, 0, 0]);

        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::UnassignedTasks { remaining: 3 }
        );
    }

    #[test]
    fn test_overassigned_negative_remainder() {
        let mut builder = minimal_builder();
        builder.push_workstation_tasks(vec![4]);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::UnassignedTasks { remaining: -4 }
        );
    }

    #[test]
    fn test_workstation_count_mismatch() {
        // Checksum is satisfied by a single list, but two workstations are
        // declared.
        let mut builder = InstanceBuilder::<i64>::new(2, 2);
        builder
            .set_accessibility_windows_left(vec![0, 0])
            .set_accessibility_windows_right(vec![5, 5])
            .set_size_of_workpiece_horizontal(10)
            .set_tasks(vec![1, 2])
            .push_workstation_tasks(vec![1, 2])
            .set_task_processing_times(vec![1, 1])
            .set_border_distances(vec![0, 0]);

        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::WorkstationCount {
                expected: 2,
                observed: 1
            }
        );
    }

    #[test]
    fn test_checksum_checked_before_workstation_count() {
        // Both the checksum and the list count are wrong; the checksum check
        // runs first.
        let mut builder = InstanceBuilder::<i64>::new(2, 2);
        builder
            .set_accessibility_windows_left(vec![0, 0])
            .set_accessibility_windows_right(vec![5, 5])
            .set_size_of_workpiece_horizontal(10)
            .set_tasks(vec![1, 2])
            .push_workstation_tasks(vec![1])
            .set_task_processing_times(vec![1, 1])
            .set_border_distances(vec![0, 0]);

        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::UnassignedTasks { remaining: 2 }
        );
    }

    #[test]
    fn test_border_distance_out_of_range() {
        let mut builder = minimal_builder();
        builder.set_border_distances(vec![2, 11]);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::BorderDistance {
                value: 11,
                bound: 10
            }
        );
    }

    #[test]
    fn test_negative_border_distance_rejected() {
        let mut builder = minimal_builder();
        builder.set_border_distances(vec![-1, 0]);
        let err = builder.build().unwrap_err();
        assert_eq!(
            err.kind(),
            &ValidationErrorKind::BorderDistance {
                value: -1,
                bound: 10
            }
        );
    }

    #[test]
    fn test_border_distance_boundaries_pass() {
        let mut builder = minimal_builder();
        builder.set_border_distances(vec![0, 10]);
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_serialized_json_shape() {
        let instance = minimal_builder().build().unwrap();
        let json = serde_json::to_string(&instance).unwrap();
        assert_eq!(
            json,
            concat!(
                "{\"number_of_tasks\":[2],",
                "\"number_of_workstations\":[1],",
                "\"accessibility_window_L\":[0],",
                "\"accessibility_window_R\":[5],",
                "\"size_of_workpiece_horizontal\":[10],",
                "\"distance_between_right_borders\":[3],",
                "\"intermediate_time_between_stages\":[2],",
                "\"elementary_step_length\":[1],",
                "\"tasks\":[1,2],",
                "\"workstation_tasks_1\":[1,2],",
                "\"task_processing_time\":[3,4],",
                "\"distance_to_right_border_of_workpiece\":[2,1]}"
            )
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ValidationErrorKind::UnassignedTasks { remaining: 3 });
        assert_eq!(
            format!("{}", err),
            "incomplete task assignment: workstation task lines leave a checksum remainder of 3"
        );

        let err = err.with_origin("instances/A_12.txt");
        let displayed = format!("{}", err);
        assert!(displayed.starts_with("instances/A_12.txt: "));
    }

    #[test]
    fn test_instance_display() {
        let instance = minimal_builder().build().unwrap();
        assert_eq!(
            format!("{}", instance),
            "Instance(num_tasks: 2, num_workstations: 1)"
        );
    }

    #[test]
    fn test_field_name_table_layout() {
        assert_eq!(FIELD_NAMES.len(), 12);
        assert_eq!(FIELD_NAMES[0], "number_of_tasks");
        assert_eq!(FIELD_NAMES[9], "workstation_tasks_");
        assert_eq!(FIELD_NAMES[11], "distance_to_right_border_of_workpiece");
    }
}
