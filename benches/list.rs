use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ring_list::RingList;
use std::collections::{LinkedList, VecDeque};

fn bench_list(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("LinkedList vs RingList (PushBack 256)");
        group.bench_function("std::collections::LinkedList", |b| {
            b.iter(|| {
                let mut l = LinkedList::new();
                for i in 0..n {
                    l.push_back(black_box(i as i32));
                }
                l
            })
        });

        group.bench_function("RingList<i32>", |b| {
            b.iter(|| {
                let mut l = RingList::with_capacity(n);
                for i in 0..n {
                    l.push_back(black_box(i as i32));
                }
                l
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("LinkedList vs RingList (Churn 256)");
        group.bench_function("std::collections::LinkedList", |b| {
            b.iter(|| {
                let mut l = LinkedList::new();
                for i in 0..n {
                    l.push_back(black_box(i as i32));
                    if i % 2 == 0 {
                        let _ = l.pop_front();
                    }
                }
                l
            })
        });

        group.bench_function("RingList<i32>", |b| {
            b.iter(|| {
                let mut l: RingList<i32> = RingList::new();
                for i in 0..n {
                    l.push_back(black_box(i as i32));
                    if i % 2 == 0 {
                        let _ = l.pop_front();
                    }
                }
                l
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("VecDeque vs RingList (Iterate 256)");
        let mut l_std = VecDeque::new();
        let mut l_ring: RingList<i32> = RingList::new();
        for i in 0..n {
            l_std.push_back(i as i32);
            l_ring.push_back(i as i32);
        }

        group.bench_function("std::collections::VecDeque", |b| {
            b.iter(|| l_std.iter().copied().sum::<i32>())
        });

        group.bench_function("RingList<i32>", |b| {
            b.iter(|| l_ring.iter().copied().sum::<i32>())
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("Vec vs RingList (Reverse 256)");
        let mut v_std: Vec<i32> = (0..n as i32).collect();
        let mut l_ring: RingList<i32> = (0..n as i32).collect();

        group.bench_function("std::vec::Vec", |b| b.iter(|| v_std.reverse()));

        group.bench_function("RingList<i32>", |b| b.iter(|| l_ring.reverse()));
        group.finish();
    }
}

criterion_group!(benches, bench_list);
criterion_main!(benches);
