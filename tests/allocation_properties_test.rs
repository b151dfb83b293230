// ==========================================
// 选择模型与分配引擎性质测试
// ==========================================
// 测试目标: 对任意输入成立的不变量
// 工具: proptest
// ==========================================

use proptest::prelude::*;

use pull_distribution::domain::{Bucket, Catalog, Selection};
use pull_distribution::engine::{BucketAllocator, SelectionOrderModel};

fn catalog_of(n: usize) -> Catalog {
    Catalog::from_pairs((0..n).map(|i| (format!("f{}", i), format!("Field {}", i))))
}

fn items_of(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("p{}", i)).collect()
}

fn buckets_of(capacities: &[i64]) -> Vec<Bucket> {
    capacities
        .iter()
        .enumerate()
        .map(|(i, &c)| Bucket::with_id(format!("B{}", i), None, c))
        .collect()
}

/// 目录大小 + 该目录上的一个合法选择（子集，随机顺序）
fn catalog_and_selection() -> impl Strategy<Value = (usize, Vec<usize>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            proptest::sample::subsequence((0..n).collect::<Vec<_>>(), 0..=n).prop_shuffle(),
        )
    })
}

proptest! {
    #[test]
    fn select_is_idempotent((n, picked) in catalog_and_selection(), x in 0usize..12) {
        let catalog = catalog_of(n);
        let model = SelectionOrderModel::new(&catalog);
        let selection =
            Selection::from_ids(&catalog, picked.iter().map(|i| format!("f{}", i))).unwrap();
        let id = format!("f{}", x % n);

        let once = model.select(&selection, &id).unwrap();
        let twice = model.select(&once, &id).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn unselect_undoes_fresh_select((n, picked) in catalog_and_selection(), x in 0usize..12) {
        let catalog = catalog_of(n);
        let model = SelectionOrderModel::new(&catalog);
        let selection =
            Selection::from_ids(&catalog, picked.iter().map(|i| format!("f{}", i))).unwrap();
        let id = format!("f{}", x % n);

        let round_trip = model.unselect(&model.select(&selection, &id).unwrap(), &id);
        if selection.contains(&id) {
            prop_assert!(!round_trip.contains(&id));
            prop_assert_eq!(round_trip.len(), selection.len() - 1);
        } else {
            prop_assert_eq!(round_trip, selection);
        }
    }

    #[test]
    fn move_keeps_same_elements(
        (n, picked) in catalog_and_selection(),
        from in 0usize..12,
        to in 0usize..12,
    ) {
        let catalog = catalog_of(n);
        let model = SelectionOrderModel::new(&catalog);
        let selection =
            Selection::from_ids(&catalog, picked.iter().map(|i| format!("f{}", i))).unwrap();

        match model.move_item(&selection, from, to) {
            Ok(moved) => {
                prop_assert!(from < selection.len() && to < selection.len());
                prop_assert_eq!(moved.as_slice()[to].as_str(), selection.as_slice()[from].as_str());
                let mut a = moved.into_vec();
                let mut b = selection.into_vec();
                a.sort();
                b.sort();
                prop_assert_eq!(a, b);
            }
            Err(_) => prop_assert!(from >= selection.len() || to >= selection.len()),
        }
    }

    #[test]
    fn allocation_conserves_and_preserves_order(
        n in 0usize..60,
        capacities in proptest::collection::vec(0i64..15, 0..8),
    ) {
        let items = items_of(n);
        let plan = BucketAllocator::new().allocate(&items, &buckets_of(&capacities)).unwrap();

        prop_assert_eq!(plan.assigned_count() + plan.unassigned_count(), n);
        prop_assert_eq!(plan.flatten(), items);
        prop_assert_eq!(plan.assignments.len(), capacities.len());
        for (assignment, &cap) in plan.assignments.iter().zip(capacities.iter()) {
            prop_assert!(assignment.items.len() as i64 <= cap);
        }
    }

    #[test]
    fn allocation_fills_earlier_buckets_first(
        n in 0usize..60,
        capacities in proptest::collection::vec(0i64..15, 1..8),
    ) {
        let plan = BucketAllocator::new()
            .allocate(&items_of(n), &buckets_of(&capacities))
            .unwrap();

        // 后面的袋有条目时，前面的袋必须已装满
        for (i, later) in plan.assignments.iter().enumerate().skip(1) {
            if !later.items.is_empty() {
                for earlier in &plan.assignments[..i] {
                    prop_assert_eq!(earlier.items.len() as i64, earlier.bucket.capacity);
                }
            }
        }
        if !plan.unassigned.is_empty() {
            prop_assert!(!plan.capacity_summary().is_sufficient);
        }
    }
}
