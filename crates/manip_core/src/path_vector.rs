//! Composite paths.
//!
//! A [`PathVector`] concatenates paths of the same output size. Its domain
//! is `[0, total_length]`; each element keeps its own parameterization and is
//! evaluated at the local time corresponding to the global one.
//!
//! # Example
//!
//! ```
//! use manip_core::configuration::Configuration;
//! use manip_core::path::Path;
//! use manip_core::path_vector::PathVector;
//! use manip_core::straight_path::StraightPath;
//!
//! let a = StraightPath::new(Configuration::from([0.0]), Configuration::from([1.0]), 1.0).unwrap();
//! let b = StraightPath::new(Configuration::from([1.0]), Configuration::from([3.0]), 2.0).unwrap();
//!
//! let mut vector = PathVector::new(1);
//! vector.append_path(Box::new(a)).unwrap();
//! vector.append_path(Box::new(b)).unwrap();
//!
//! assert_eq!(vector.length(), 3.0);
//! assert_eq!(vector.eval(2.0).unwrap(), Configuration::from([2.0]));
//! ```

use crate::configuration::Configuration;
use crate::error::PathError;
use crate::path::{BoxedPath, Path, TimeRange, check_extract_range};

/// An ordered sequence of paths evaluated one after the other.
#[derive(Debug, Clone)]
pub struct PathVector {
    output_size: usize,
    paths: Vec<BoxedPath>,
}

impl PathVector {
    /// Creates an empty composite path producing `output_size`-dimensional
    /// configurations.
    #[must_use]
    pub fn new(output_size: usize) -> Self {
        Self {
            output_size,
            paths: Vec::new(),
        }
    }

    /// Creates a composite path from a sequence of paths.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DimensionMismatch`] if a path's output size
    /// differs from `output_size`.
    pub fn from_paths<I>(output_size: usize, paths: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = BoxedPath>,
    {
        let mut vector = Self::new(output_size);
        for path in paths {
            vector.append_path(path)?;
        }
        Ok(vector)
    }

    /// Appends a path at the end of the sequence.
    ///
    /// A composite path is appended as a single element, not flattened.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::DimensionMismatch`] if the path's output size
    /// differs from this vector's.
    pub fn append_path(&mut self, path: BoxedPath) -> Result<(), PathError> {
        if path.output_size() != self.output_size {
            return Err(PathError::DimensionMismatch {
                expected: self.output_size,
                found: path.output_size(),
            });
        }
        self.paths.push(path);
        Ok(())
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn number_paths(&self) -> usize {
        self.paths.len()
    }

    /// Returns `true` if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Returns the element at `rank`.
    #[must_use]
    pub fn path_at_rank(&self, rank: usize) -> Option<&dyn Path> {
        self.paths.get(rank).map(|path| &**path)
    }

    /// Returns all elements in order.
    #[must_use]
    pub fn paths(&self) -> &[BoxedPath] {
        &self.paths
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &dyn Path> + '_ {
        self.paths.iter().map(|path| &**path)
    }

    /// Maps a global time to an element rank and that element's local time.
    fn locate(&self, t: f64) -> Result<(usize, f64), PathError> {
        let domain = self.time_range();
        if self.paths.is_empty() {
            return Err(PathError::Empty);
        }
        if !domain.contains(t) {
            return Err(PathError::TimeOutOfRange {
                time: t,
                start: domain.start,
                end: domain.end,
            });
        }

        let last = self.paths.len() - 1;
        let mut offset = 0.0;
        for (rank, path) in self.paths.iter().enumerate() {
            let local = path.time_range();
            if t <= offset + local.length() || rank == last {
                let time = (local.start + (t - offset)).clamp(local.start, local.end);
                return Ok((rank, time));
            }
            offset += local.length();
        }
        Err(PathError::Empty)
    }
}

impl Path for PathVector {
    fn time_range(&self) -> TimeRange {
        TimeRange {
            start: 0.0,
            end: self.paths.iter().map(|path| path.length()).sum(),
        }
    }

    fn output_size(&self) -> usize {
        self.output_size
    }

    fn eval(&self, t: f64) -> Result<Configuration, PathError> {
        let (rank, local) = self.locate(t)?;
        self.paths[rank].eval(local)
    }

    fn extract(&self, range: TimeRange) -> Result<BoxedPath, PathError> {
        check_extract_range(self.time_range(), range)?;

        if range.is_degenerate() {
            let (rank, local) = self.locate(range.start)?;
            let point = self.paths[rank].extract(TimeRange::point(local))?;
            return Ok(Box::new(Self::from_paths(self.output_size, [point])?));
        }

        let mut extracted = Self::new(self.output_size);
        let mut offset = 0.0;
        for path in &self.paths {
            let local = path.time_range();
            let start = range.start.max(offset);
            let end = range.end.min(offset + local.length());
            if start < end {
                let piece = TimeRange {
                    start: (local.start + (start - offset)).clamp(local.start, local.end),
                    end: (local.start + (end - offset)).clamp(local.start, local.end),
                };
                extracted.append_path(path.extract(piece)?)?;
            }
            offset += local.length();
        }
        Ok(Box::new(extracted))
    }

    fn boxed_clone(&self) -> BoxedPath {
        Box::new(self.clone())
    }
}
