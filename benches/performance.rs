//! Performance benchmarks for kwonly
//!
//! These benchmarks measure the performance of key operations:
//! - Source checking on modules of various sizes
//! - File walking with the fixed directory exclusions
//! - Full check workflow end-to-end
//!
//! ## Running Benchmarks
//!
//! To run all benchmarks:
//! ```bash
//! cargo bench
//! ```
//!
//! To run specific benchmarks:
//! ```bash
//! cargo bench source_checking
//! cargo bench file_walking
//! ```
//!
//! ## Expected Performance Characteristics
//!
//! Based on the implementation:
//!
//! ### Source Checking
//! - tree-sitter parsing is the dominant cost per file
//! - The parameter-list walk is linear in the number of nodes
//! - Suppression lookup is a substring scan of one line per definition
//!
//! ### File Walking
//! - Should scale linearly with number of files
//! - Excluded directories are pruned before descent, so large
//!   virtualenvs cost nothing
//!
//! ### Parallel Execution
//! - Uses rayon for per-file parallelism
//! - Should scale well up to number of CPU cores

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kwonly::check_source;
use kwonly::engine::FileWalker;
use kwonly::engine::executor::execute;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Generate a Python module with the given number of function definitions.
///
/// Every other definition violates the rule, so checking produces findings
/// without every function being reported.
fn generate_module(functions: usize) -> String {
    let mut content = String::from("\"\"\"Generated benchmark module.\"\"\"\n\n");
    for i in 0..functions {
        if i % 2 == 0 {
            content.push_str(&format!(
                "def handler_{i}(request, timeout=30):\n    return request\n\n"
            ));
        } else {
            content.push_str(&format!(
                "def worker_{i}(job, *, retries=3):\n    return job\n\n"
            ));
        }
    }
    content
}

/// Create a temporary directory with test Python files.
///
/// Also populates a virtualenv and build directory that the walker must
/// prune, to keep the tree realistic.
fn create_test_tree(count: usize, functions: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let content = generate_module(functions);

    for i in 0..count {
        fs::write(temp_dir.path().join(format!("file{i}.py")), &content).unwrap();
    }

    for dir in [".venv/lib", "build/out"] {
        let path = temp_dir.path().join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("skipped.py"), &content).unwrap();
    }

    temp_dir
}

/// Discover every Python file under a root
fn discover(root: PathBuf) -> Vec<PathBuf> {
    FileWalker::new(&[root], &[])
        .unwrap()
        .walk()
        .filter_map(Result::ok)
        .collect()
}

// ============================================================================
// Source Checking Benchmarks
// ============================================================================

/// Benchmark checking a single module of varying size
///
/// This measures parse plus rule walk, the per-file hot path.
fn bench_source_checking(c: &mut Criterion) {
    let mut group = c.benchmark_group("source_checking");

    for functions in [10, 100, 500].iter() {
        let content = generate_module(*functions);

        group.throughput(Throughput::Bytes(content.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(functions),
            &content,
            |b, content| {
                b.iter(|| {
                    let findings = check_source(black_box(content));
                    black_box(findings)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the suppression path
///
/// Every definition carries the marker, so the check parses and walks but
/// reports nothing.
fn bench_suppressed_module(c: &mut Criterion) {
    let mut group = c.benchmark_group("suppressed_module");

    let mut content = String::new();
    for i in 0..100 {
        content.push_str(&format!(
            "def h_{i}(a, b=1):  # kwonly: ignore\n    return a\n\n"
        ));
    }

    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("100_suppressed", |b| {
        b.iter(|| {
            let findings = check_source(black_box(&content));
            black_box(findings)
        });
    });

    group.finish();
}

// ============================================================================
// File Walking Benchmarks
// ============================================================================

/// Benchmark file walking performance
///
/// This measures the speed of discovering files, with and without a user
/// exclude pattern on top of the fixed exclusions.
fn bench_file_walking(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_walking");

    for file_count in [10, 50, 100].iter() {
        let temp_dir = create_test_tree(*file_count, 5);

        group.throughput(Throughput::Elements(*file_count as u64));

        group.bench_with_input(
            BenchmarkId::new("fixed_exclusions", file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let files = discover(temp_dir.path().to_path_buf());
                    black_box(files)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("with_exclude_pattern", file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let exclude = vec!["*0.py".to_string()];
                    let files: Vec<_> = FileWalker::new(
                        &[temp_dir.path().to_path_buf()],
                        &exclude,
                    )
                    .unwrap()
                    .walk()
                    .filter_map(Result::ok)
                    .collect();
                    black_box(files)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// End-to-End Workflow Benchmarks
// ============================================================================

/// Benchmark the complete check workflow
///
/// This measures the end-to-end performance including:
/// - File walking
/// - Parallel parsing and checking
/// - Result aggregation
fn bench_full_workflow(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_workflow");
    group.sample_size(10); // Reduce sample size for expensive benchmarks

    for file_count in [10, 50].iter() {
        let temp_dir = create_test_tree(*file_count, 20);

        group.throughput(Throughput::Elements(*file_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    let files = discover(temp_dir.path().to_path_buf());
                    let result = execute(files);
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark parallel execution scaling
///
/// Discovery runs once; the measured section is the rayon-parallel check of
/// the discovered files.
fn bench_parallel_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_execution");
    group.sample_size(10);

    let temp_dir = create_test_tree(100, 20);
    let files = discover(temp_dir.path().to_path_buf());

    group.bench_function("100_files", |b| {
        b.iter(|| {
            let result = execute(files.clone());
            black_box(result)
        });
    });

    group.finish();
}

// ============================================================================
// Benchmark Registration
// ============================================================================

criterion_group!(source_benches, bench_source_checking, bench_suppressed_module,);

criterion_group!(file_benches, bench_file_walking,);

criterion_group!(
    workflow_benches,
    bench_full_workflow,
    bench_parallel_execution,
);

criterion_main!(source_benches, file_benches, workflow_benches);
