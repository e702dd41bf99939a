//! Clusters: 1, 2 or 4 mutually adjacent zones a new curve may straddle.

use std::collections::BTreeSet;
use std::fmt;

use crate::description::Zone;

use super::types::RecompositionData;

/// Errors surfaced when a cluster's adjacency constraints do not hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterError {
    /// Two zones that must be separated by exactly one curve are not.
    NonAdjacent { first: Zone, second: Zone },
    /// Clusters hold 1, 2 or 4 zones.
    UnsupportedSize { len: usize },
}

impl fmt::Display for ClusterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClusterError::NonAdjacent { first, second } => {
                write!(f, "non-adjacent cluster pair {first} / {second}")
            }
            ClusterError::UnsupportedSize { len } => {
                write!(f, "cluster of {len} zones (expected 1, 2 or 4)")
            }
        }
    }
}

impl std::error::Error for ClusterError {}

/// A validated, ordered group of zones.
///
/// Invariants (checked at construction):
/// - pair `[z1, z2]`: `z1` and `z2` straddle one curve;
/// - quad `[z1, z2, z3, z4]`: `z1|z2` and `z3|z4` straddle the same curve, and
///   `z1|z3` and `z2|z4` straddle the same curve.
///
/// Equality ignores order.
#[derive(Clone, Debug, Eq)]
pub struct Cluster {
    zones: Vec<Zone>,
}

impl Cluster {
    pub fn single(zone: Zone) -> Self {
        Self { zones: vec![zone] }
    }

    pub fn pair(z1: Zone, z2: Zone) -> Result<Self, ClusterError> {
        check_adjacent(&z1, &z2)?;
        Ok(Self {
            zones: vec![z1, z2],
        })
    }

    pub fn quad(z1: Zone, z2: Zone, z3: Zone, z4: Zone) -> Result<Self, ClusterError> {
        check_adjacent(&z1, &z2)?;
        check_adjacent(&z1, &z3)?;
        if z2.straddled_contour(&z4) != z1.straddled_contour(&z3) {
            return Err(ClusterError::NonAdjacent {
                first: z2,
                second: z4,
            });
        }
        if z3.straddled_contour(&z4) != z1.straddled_contour(&z2) {
            return Err(ClusterError::NonAdjacent {
                first: z3,
                second: z4,
            });
        }
        Ok(Self {
            zones: vec![z1, z2, z3, z4],
        })
    }

    /// Dispatch on the number of zones.
    pub fn new(zones: Vec<Zone>) -> Result<Self, ClusterError> {
        let len = zones.len();
        let mut it = zones.into_iter();
        match (len, it.next(), it.next(), it.next(), it.next()) {
            (1, Some(z1), None, None, None) => Ok(Self::single(z1)),
            (2, Some(z1), Some(z2), None, None) => Self::pair(z1, z2),
            (4, Some(z1), Some(z2), Some(z3), Some(z4)) => Self::quad(z1, z2, z3, z4),
            _ => Err(ClusterError::UnsupportedSize { len }),
        }
    }

    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

/// Group the zones a curve splits into clusters, largest first.
///
/// Zones are taken in order; each one starts a quad if three later zones
/// complete one, else a pair with the first adjacent zone, else stays single.
pub fn clusters(data: &RecompositionData) -> Vec<Cluster> {
    let mut left: Vec<Zone> = data.split_zones.clone();
    let mut out = Vec::new();
    while !left.is_empty() {
        let z1 = left.remove(0);
        if let Some((cluster, mut used)) = find_quad(&z1, &left) {
            used.sort_unstable_by(|a, b| b.cmp(a));
            for i in used {
                left.remove(i);
            }
            out.push(cluster);
            continue;
        }
        let pair = left.iter().enumerate().find_map(|(j, z2)| {
            Cluster::pair(z1.clone(), z2.clone())
                .ok()
                .map(|cluster| (j, cluster))
        });
        match pair {
            Some((j, cluster)) => {
                left.remove(j);
                out.push(cluster);
            }
            None => out.push(Cluster::single(z1)),
        }
    }
    out
}

fn find_quad(z1: &Zone, rest: &[Zone]) -> Option<(Cluster, [usize; 3])> {
    for i in 0..rest.len() {
        for j in (i + 1)..rest.len() {
            for k in 0..rest.len() {
                if k == i || k == j {
                    continue;
                }
                let quad = Cluster::quad(
                    z1.clone(),
                    rest[i].clone(),
                    rest[j].clone(),
                    rest[k].clone(),
                );
                if let Ok(cluster) = quad {
                    return Some((cluster, [i, j, k]));
                }
            }
        }
    }
    None
}

fn check_adjacent(z1: &Zone, z2: &Zone) -> Result<(), ClusterError> {
    if z1.straddled_contour(z2).is_some() {
        Ok(())
    } else {
        Err(ClusterError::NonAdjacent {
            first: z1.clone(),
            second: z2.clone(),
        })
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        let mine: BTreeSet<&Zone> = self.zones.iter().collect();
        let theirs: BTreeSet<&Zone> = other.zones.iter().collect();
        mine == theirs
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, zone) in self.zones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{zone}")?;
        }
        f.write_str("]")
    }
}
