//! Python file discovery under one or more root paths
//!
//! Roots naming a directory are walked recursively for `.py` files; roots
//! naming a `.py` file directly are accepted as-is. Paths with a component
//! from the fixed exclusion set never contribute files, so virtual
//! environments and build output stay out of a check without configuration.

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::iter;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Directory names that never contribute files, at any depth.
pub const EXCLUDED_DIRS: [&str; 5] = [".git", ".venv", "build", "dist", "node_modules"];

/// Errors that can occur during file walking
#[derive(Debug, Error)]
pub enum FileWalkerError {
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Reason why a path was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Path has a component from the fixed exclusion set
    Excluded,
    /// Path matched a user-supplied exclude pattern
    ExcludedByPattern,
    /// File does not have the `.py` extension
    NotPython,
    /// Path is not a regular file (e.g. directory, symlink)
    NotAFile,
    /// Root path does not exist
    MissingRoot,
}

/// Result of file walking, either a file to check or a skipped path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkResult {
    /// File to be checked
    File(PathBuf),
    /// Path that was skipped, with the reason
    Skipped { path: PathBuf, reason: SkipReason },
}

/// Discovers Python files under a set of root paths.
///
/// Roots are visited in the order given; within one root, files come back in
/// lexicographic path order, so discovery is deterministic for a fixed tree.
pub struct FileWalker {
    roots: Vec<PathBuf>,
    exclude_set: Option<GlobSet>,
    verbose: bool,
}

impl FileWalker {
    /// Creates a new FileWalker
    ///
    /// # Arguments
    /// * `roots` - Root paths to search (directories or `.py` files)
    /// * `exclude` - Additional exclude glob patterns (may be empty)
    ///
    /// # Errors
    /// Returns `FileWalkerError::InvalidGlob` if an exclude pattern does not
    /// compile.
    pub fn new(roots: &[PathBuf], exclude: &[String]) -> Result<Self, FileWalkerError> {
        Self::with_verbose(roots, exclude, false)
    }

    /// Creates a new FileWalker with verbose mode option
    ///
    /// In verbose mode the walk also yields `WalkResult::Skipped` entries so
    /// callers can report why paths were passed over.
    pub fn with_verbose(
        roots: &[PathBuf],
        exclude: &[String],
        verbose: bool,
    ) -> Result<Self, FileWalkerError> {
        let exclude_set = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude)?)
        };

        Ok(Self {
            roots: roots.to_vec(),
            exclude_set,
            verbose,
        })
    }

    /// Walks the roots and returns an iterator over Python files to check
    pub fn walk(self) -> impl Iterator<Item = Result<PathBuf, FileWalkerError>> {
        self.walk_with_skip_info()
            .filter_map(|result| match result {
                Ok(WalkResult::File(path)) => Some(Ok(path)),
                Ok(WalkResult::Skipped { .. }) => None,
                Err(e) => Some(Err(e)),
            })
    }

    /// Walks the roots and returns an iterator with skip information
    pub fn walk_with_skip_info(
        self,
    ) -> impl Iterator<Item = Result<WalkResult, FileWalkerError>> {
        let exclude_set = self.exclude_set;
        let verbose = self.verbose;

        self.roots
            .into_iter()
            .flat_map(move |root| walk_root(root, exclude_set.clone(), verbose))
    }
}

/// Builds a GlobSet from exclude patterns
fn build_globset(patterns: &[String]) -> Result<GlobSet, FileWalkerError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| FileWalkerError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| FileWalkerError::InvalidGlob {
        pattern: "<globset>".to_string(),
        source: e,
    })
}

fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}

fn is_excluded_name(name: &OsStr) -> bool {
    EXCLUDED_DIRS.iter().any(|dir| name == *dir)
}

/// True when any component of the path, as constructed from the root
/// argument, is in the fixed exclusion set.
fn has_excluded_component(path: &Path) -> bool {
    path.components()
        .any(|c| matches!(c, Component::Normal(name) if is_excluded_name(name)))
}

/// Walks a single root path.
///
/// A root naming a `.py` file is accepted directly without the excluded
/// component check, so an explicitly named file is always checked. Directory
/// roots are walked with the standard ignore-file filters disabled: this
/// tool's exclusion set is fixed and does not consult gitignore rules.
fn walk_root(
    root: PathBuf,
    exclude_set: Option<GlobSet>,
    verbose: bool,
) -> Box<dyn Iterator<Item = Result<WalkResult, FileWalkerError>>> {
    if root.is_file() {
        let result = if !is_python_file(&root) {
            skipped(root, SkipReason::NotPython, verbose)
        } else if matches_exclude(&exclude_set, &root) {
            skipped(root, SkipReason::ExcludedByPattern, verbose)
        } else {
            Some(WalkResult::File(root))
        };
        return match result {
            Some(r) => Box::new(iter::once(Ok(r))),
            None => Box::new(iter::empty()),
        };
    }

    if !root.is_dir() {
        return match skipped(root, SkipReason::MissingRoot, verbose) {
            Some(r) => Box::new(iter::once(Ok(r))),
            None => Box::new(iter::empty()),
        };
    }

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_name(entry.file_name()))
        .build();

    Box::new(walker.filter_map(move |result| {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => return Some(Err(FileWalkerError::Walk(e))),
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            return skipped(entry.into_path(), SkipReason::NotAFile, verbose).map(Ok);
        }

        let path = entry.into_path();
        if !is_python_file(&path) {
            return skipped(path, SkipReason::NotPython, verbose).map(Ok);
        }
        // filter_entry prunes excluded directories below the root; this also
        // catches an excluded component in the root path itself.
        if has_excluded_component(&path) {
            return skipped(path, SkipReason::Excluded, verbose).map(Ok);
        }
        if matches_exclude(&exclude_set, &path) {
            return skipped(path, SkipReason::ExcludedByPattern, verbose).map(Ok);
        }

        Some(Ok(WalkResult::File(path)))
    }))
}

fn matches_exclude(exclude_set: &Option<GlobSet>, path: &Path) -> bool {
    exclude_set.as_ref().is_some_and(|set| set.is_match(path))
}

fn skipped(path: PathBuf, reason: SkipReason, verbose: bool) -> Option<WalkResult> {
    verbose.then_some(WalkResult::Skipped { path, reason })
}
