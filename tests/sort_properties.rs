use proptest::prelude::*;

use datatable::table::{project, Column, SortDirection, SortState, Value};

#[derive(Clone, Debug)]
struct Item {
    tag: usize,
    key: Option<i64>,
}

fn key_column() -> Vec<Column<Item>> {
    vec![Column::new("key", "Key", |item: &Item| Value::from(item.key)).sortable()]
}

fn items() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(prop::option::weighted(0.8, -5i64..5), 0..40).prop_map(|keys| {
        keys.into_iter()
            .enumerate()
            .map(|(tag, key)| Item { tag, key })
            .collect()
    })
}

fn direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

proptest! {
    #[test]
    fn sorted_view_is_a_permutation(data in items(), dir in direction()) {
        let columns = key_column();
        let view = project(&data, &columns, &SortState::by("key", dir));
        let mut tags: Vec<usize> = view.iter().map(|item| item.tag).collect();
        tags.sort_unstable();
        prop_assert_eq!(tags, (0..data.len()).collect::<Vec<_>>());
    }

    #[test]
    fn ties_keep_input_order(data in items(), dir in direction()) {
        let columns = key_column();
        let view = project(&data, &columns, &SortState::by("key", dir));
        for pair in view.windows(2) {
            if pair[0].key == pair[1].key {
                prop_assert!(pair[0].tag < pair[1].tag);
            }
        }
    }

    #[test]
    fn nulls_sit_at_the_expected_end(data in items(), dir in direction()) {
        let columns = key_column();
        let view = project(&data, &columns, &SortState::by("key", dir));
        let nulls: Vec<bool> = view.iter().map(|item| item.key.is_none()).collect();
        let boundary = match dir {
            SortDirection::Ascending => nulls.iter().position(|&n| n).unwrap_or(nulls.len()),
            SortDirection::Descending => nulls.iter().position(|&n| !n).unwrap_or(nulls.len()),
        };
        let (head, tail) = nulls.split_at(boundary);
        match dir {
            SortDirection::Ascending => prop_assert!(head.iter().all(|n| !n) && tail.iter().all(|&n| n)),
            SortDirection::Descending => prop_assert!(head.iter().all(|&n| n) && tail.iter().all(|n| !n)),
        }
    }

    #[test]
    fn keys_are_ordered(data in items(), dir in direction()) {
        let columns = key_column();
        let view = project(&data, &columns, &SortState::by("key", dir));
        let keys: Vec<i64> = view.iter().filter_map(|item| item.key).collect();
        for pair in keys.windows(2) {
            match dir {
                SortDirection::Ascending => prop_assert!(pair[0] <= pair[1]),
                SortDirection::Descending => prop_assert!(pair[0] >= pair[1]),
            }
        }
    }

    #[test]
    fn unsorted_is_identity(data in items()) {
        let columns = key_column();
        let view = project(&data, &columns, &SortState::unsorted());
        let tags: Vec<usize> = view.iter().map(|item| item.tag).collect();
        prop_assert_eq!(tags, (0..data.len()).collect::<Vec<_>>());
    }
}
