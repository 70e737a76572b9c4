use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::hash::{BuildHasher, Hash};
use std::collections::HashMap;
use std::collections::hash_map;

use crate::info::short_type_name;
use crate::ops::{Map, MapKey, cmp_key_texts};
use crate::{Reflect, ReflectMut, ReflectRef};

macro_rules! impl_map_reflect {
    () => {
        #[inline]
        fn type_name(&self) -> &'static str {
            short_type_name::<Self>()
        }

        any_methods!();

        #[inline]
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Map(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Map(self)
        }

        #[inline]
        fn new_default() -> Self {
            Self::default()
        }

        #[inline]
        fn reset(&mut self) {
            Self::clear(self);
        }
    };
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Reflect,
{
    impl_map_reflect!();
}

impl<K, V> Map for BTreeMap<K, V>
where
    K: MapKey + Ord + 'static,
    V: Reflect,
{
    #[inline]
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        let key = K::from_key(key)?;
        BTreeMap::get(self, &key).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        let key = K::from_key(key)?;
        BTreeMap::get_mut(self, &key).map(|v| v as &mut dyn Reflect)
    }

    fn entries(&self) -> Vec<(String, &dyn Reflect)> {
        self.iter()
            .map(|(k, v)| (k.to_key(), v as &dyn Reflect))
            .collect()
    }

    fn values_mut(&mut self) -> Vec<&mut dyn Reflect> {
        BTreeMap::values_mut(self)
            .map(|v| v as &mut dyn Reflect)
            .collect()
    }

    fn insert_default(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        let slot = match self.entry(K::from_key(key)?) {
            btree_map::Entry::Occupied(entry) => {
                let value = entry.into_mut();
                value.reset();
                value
            }
            btree_map::Entry::Vacant(entry) => entry.insert(V::new_default()),
        };
        Some(slot)
    }

    fn remove(&mut self, key: &str) -> bool {
        K::from_key(key).is_some_and(|key| BTreeMap::remove(self, &key).is_some())
    }

    #[inline]
    fn clear(&mut self) {
        BTreeMap::clear(self);
    }

    #[inline]
    fn cmp_keys(&self, a: &str, b: &str) -> Ordering {
        cmp_key_texts::<K>(a, b, Ord::cmp)
    }
}

// -----------------------------------------------------------------------------
// HashMap

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash + 'static,
    V: Reflect,
    S: BuildHasher + Default + 'static,
{
    impl_map_reflect!();
}

impl<K, V, S> Map for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash + 'static,
    V: Reflect,
    S: BuildHasher + Default + 'static,
{
    #[inline]
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn get(&self, key: &str) -> Option<&dyn Reflect> {
        let key = K::from_key(key)?;
        HashMap::get(self, &key).map(|v| v as &dyn Reflect)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        let key = K::from_key(key)?;
        HashMap::get_mut(self, &key).map(|v| v as &mut dyn Reflect)
    }

    /// Sorted by [`MapKey::cmp_key`], so output does not depend on hashing.
    fn entries(&self) -> Vec<(String, &dyn Reflect)> {
        let mut entries: Vec<(&K, &V)> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp_key(b.0));
        entries
            .into_iter()
            .map(|(k, v)| (k.to_key(), v as &dyn Reflect))
            .collect()
    }

    fn values_mut(&mut self) -> Vec<&mut dyn Reflect> {
        HashMap::values_mut(self)
            .map(|v| v as &mut dyn Reflect)
            .collect()
    }

    fn insert_default(&mut self, key: &str) -> Option<&mut dyn Reflect> {
        let slot = match self.entry(K::from_key(key)?) {
            hash_map::Entry::Occupied(entry) => {
                let value = entry.into_mut();
                value.reset();
                value
            }
            hash_map::Entry::Vacant(entry) => entry.insert(V::new_default()),
        };
        Some(slot)
    }

    fn remove(&mut self, key: &str) -> bool {
        K::from_key(key).is_some_and(|key| HashMap::remove(self, &key).is_some())
    }

    #[inline]
    fn clear(&mut self) {
        HashMap::clear(self);
    }

    #[inline]
    fn cmp_keys(&self, a: &str, b: &str) -> Ordering {
        cmp_key_texts::<K>(a, b, K::cmp_key)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::ops::Map;

    #[test]
    fn keys_go_through_text() {
        let mut map: BTreeMap<u32, String> = BTreeMap::new();
        Map::insert_default(&mut map, "7").unwrap();
        assert!(Map::insert_default(&mut map, "seven").is_none());
        assert!(Map::contains_key(&map, "7"));
        assert!(Map::remove(&mut map, "7"));
        assert!(!Map::remove(&mut map, "7"));
    }

    #[test]
    fn hash_map_entries_are_sorted() {
        let map: HashMap<String, i32> =
            [("b".into(), 2), ("a".into(), 1), ("c".into(), 3)].into_iter().collect();
        let keys: Vec<String> = Map::entries(&map).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["a", "b", "c"]);

        let map: HashMap<u16, ()> = [(100, ()), (9, ()), (10, ())].into_iter().collect();
        let keys: Vec<String> = Map::entries(&map).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["9", "10", "100"]);
    }
}
