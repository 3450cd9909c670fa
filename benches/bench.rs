use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use ordered_tree::{dedup_sort, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting values in ascending order, so every node only
/// has a right child.
fn get_skewed_tree(num_levels: u32) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in 0..num_nodes_in_full_tree(num_levels) {
        tree.insert(x as i32);
    }
    tree
}

/// Builds a full, balanced tree with `num_levels` levels of nodes.
fn get_balanced_tree(num_levels: u32) -> Tree<i32> {
    Tree::from_sorted((0..num_nodes_in_full_tree(num_levels) as i32).collect())
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// shapes of BSTs before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The skewed trees are built by repeated insertion which is quadratic, so
    // they stop short of the largest balanced size.
    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        let tree_tests = [
            ("skewed", get_skewed_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _node = black_box(tree.find(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });
    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });
    bench_helper(c, "find-miss", |tree, i| {
        let _node = black_box(tree.find(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });
    bench_helper(c, "rebalance", |tree, _| {
        tree.rebalance();
    });
    bench_helper(c, "is-balanced", |tree, _| {
        let _balanced = black_box(tree.is_balanced());
    });

    let mut group = c.benchmark_group("dedup-sort");
    for size in [16usize, 1024, 65536] {
        // Every value appears twice, interleaved from both ends.
        let input: Vec<i32> = (0..size as i32)
            .map(|x| if x % 2 == 0 { x / 2 } else { (size as i32 - x) / 2 })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| dedup_sort(black_box(input.clone())))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
