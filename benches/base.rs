use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hashcache::{HashCache, Mutators};
use std::fmt::Formatter;
use std::hash::Hash;
use std::{collections::HashMap, fmt::Display};

#[inline]
fn move_things_around<T: Hash + Eq>(
    map1: &mut HashMap<T, ()>,
    map2: &mut HashMap<T, ()>,
    steps: usize,
) {
    for _ in 0..steps {
        for (key, value) in map1.drain() {
            map2.insert(key, value);
        }
        for (key, value) in map2.drain() {
            map1.insert(key, value);
        }
    }
}

/// Same as `move_things_around`, but every key is written between moves.
/// `member` decides whether the write invalidates the memo.
#[inline]
fn mutate_things_around(
    map1: &mut HashMap<HashCache<String>, ()>,
    map2: &mut HashMap<HashCache<String>, ()>,
    member: &str,
    steps: usize,
) {
    for _ in 0..steps {
        for (mut key, value) in map1.drain() {
            HashCache::mutate(&mut key, member, |s| s.make_ascii_uppercase());
            map2.insert(key, value);
        }
        for (mut key, value) in map2.drain() {
            HashCache::mutate(&mut key, member, |s| s.make_ascii_lowercase());
            map1.insert(key, value);
        }
    }
}

struct Param(usize, usize, usize);

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    for &map_size in [100, 1000, 10000].iter() {
        for &word_length in [5, 10, 20, 100].iter() {
            for &steps in [1, 5, 10, 20].iter() {
                let mut data = vec![];
                for j in 0..map_size {
                    data.push(j.to_string().repeat(word_length));
                }
                bench_hashmap("Regular", &mut group, map_size, word_length, steps, &data);
                let data = data
                    .into_iter()
                    .map(HashCache::new)
                    .collect::<Vec<_>>();
                bench_hashmap("Cached", &mut group, map_size, word_length, steps, &data);
            }
        }
    }
    group.finish();

    let mut group = c.benchmark_group("mutations");
    let mutators = Mutators::from_static(&["case"]);
    for &map_size in [100, 1000].iter() {
        for &steps in [1, 5].iter() {
            let data = (0..map_size)
                .map(|j| {
                    HashCache::with_mutators(j.to_string().repeat(20), mutators.clone())
                })
                .collect::<Vec<_>>();
            for member in ["case", "untracked"] {
                group.bench_with_input(
                    BenchmarkId::new(member, Param(map_size, 20, steps)),
                    &data,
                    |b, data| {
                        b.iter(|| {
                            let mut map = HashMap::new();
                            for key in data {
                                map.insert(key.clone(), ());
                            }
                            mutate_things_around(&mut map, &mut HashMap::new(), member, steps);
                        })
                    },
                );
            }
        }
    }
    group.finish();
}

fn bench_hashmap<T: Eq + Hash + Clone>(
    name: &str,
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    map_size: usize,
    word_length: usize,
    steps: usize,
    data: &Vec<T>,
) {
    group.bench_with_input(
        BenchmarkId::new(name, Param(map_size, word_length, steps)),
        data,
        |b, data| {
            b.iter(|| {
                let mut map = HashMap::new();
                for key in data {
                    map.insert(key.clone(), ());
                }
                move_things_around(&mut map, &mut HashMap::new(), steps);
            })
        },
    );
}

criterion_group!(benches, bench);
criterion_main!(benches);
