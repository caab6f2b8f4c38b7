/// Sums values per key. Iterates keys in order of first insertion.
#[derive(Debug, Clone)]
pub struct Aggregate<K, V> {
    index: std::collections::HashMap<K, usize>,
    entries: Vec<(K, V)>,
    sum: V,
}

impl<K, V> Default for Aggregate<K, V>
where
    V: Default,
{
    fn default() -> Self {
        Self {
            index: Default::default(),
            entries: Default::default(),
            sum: Default::default(),
        }
    }
}

impl<K, V> PartialEq for Aggregate<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.sum == other.sum
    }
}

impl<K, V> Eq for Aggregate<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> Aggregate<K, V> {
    pub fn sum(&self) -> V
    where
        V: Copy,
    {
        self.sum
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn add(&mut self, key: K, value: V)
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy + Default + std::ops::AddAssign,
    {
        let i = *self.index.entry(key).or_insert_with(|| {
            self.entries.push((key, V::default()));
            self.entries.len() - 1
        });
        self.entries[i].1 += value;
        self.sum += value;
    }

    #[cfg(test)]
    pub fn get(&self, key: K) -> Option<V>
    where
        K: Copy + Eq + std::hash::Hash,
        V: Copy,
    {
        self.index.get(&key).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, V)> + '_
    where
        K: Copy,
        V: Copy,
    {
        self.entries.iter().copied()
    }
}

impl<K, V> FromIterator<(K, V)> for Aggregate<K, V>
where
    K: Copy + Eq + std::hash::Hash,
    V: Copy + Default + std::ops::AddAssign,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut agg = Aggregate::<K, V>::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
