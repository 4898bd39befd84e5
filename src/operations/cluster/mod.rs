use std::collections::BTreeSet;

use tracing::debug;

use super::boolean::Union;
use crate::region::RegionOps;

/// One merged cluster: the accumulated union of every region connected to
/// its first member by a chain of overlaps.
#[derive(Debug, Clone)]
pub struct Representative<R> {
    /// Arena index of the region that founded this cluster.
    pub index: usize,
    /// Label of the founding region.
    pub label: usize,
    /// Accumulated union of all members.
    pub region: R,
    /// Labels of every region merged into this cluster, founder included.
    pub members: BTreeSet<usize>,
}

/// Result of [`ClusterOverlaps`].
#[derive(Debug, Clone)]
pub struct Clusters<R> {
    /// Representatives in discovery order.
    pub representatives: Vec<Representative<R>>,
    /// Number of scans run, including the final unchanged one.
    pub passes: usize,
}

impl<R> Clusters<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }
}

/// Groups regions that are connected by a chain of pairwise overlaps and
/// unions each group into a single representative.
///
/// The scan is a fixed-point iteration over an index arena. Region 0 always
/// founds the first cluster. Each pass walks the working indices in
/// ascending order and tests every one against the current representatives
/// in order; an overlapping index is unioned into *every* representative it
/// touches, otherwise it becomes a new representative. The next pass works
/// on the representatives found in this one (region 0 excepted), and
/// iteration stops after the first pass without a merge.
pub struct ClusterOverlaps<R> {
    regions: Vec<R>,
    labels: Vec<usize>,
}

impl<R: RegionOps + Clone> ClusterOverlaps<R> {
    /// Creates a new `ClusterOverlaps` operation. Regions are labelled with
    /// their position in `regions`.
    #[must_use]
    pub fn new(regions: Vec<R>) -> Self {
        let labels = (0..regions.len()).collect();
        Self { regions, labels }
    }

    /// Creates a new `ClusterOverlaps` operation over `(label, region)`
    /// pairs. The arena order is the order of `entries`.
    #[must_use]
    pub fn labeled(entries: Vec<(usize, R)>) -> Self {
        let (labels, regions) = entries.into_iter().unzip();
        Self { regions, labels }
    }

    /// Executes the clustering.
    #[must_use]
    pub fn execute(self) -> Clusters<R> {
        let Self { regions, labels } = self;

        if regions.is_empty() {
            return Clusters {
                representatives: Vec::new(),
                passes: 0,
            };
        }

        // Overlap is decided on the input regions a slot has absorbed, never
        // on the accumulated union: a union backend may move vertices, and a
        // region touching an input only at its boundary must still join.
        let mut merged = regions.clone();
        let mut parts: Vec<BTreeSet<usize>> =
            (0..regions.len()).map(|i| BTreeSet::from([i])).collect();
        let mut look_at: Vec<usize> = (1..regions.len()).collect();
        let mut to_consider: Vec<usize>;
        let mut passes = 0;

        loop {
            passes += 1;
            let mut changed = false;
            to_consider = vec![0];

            for &i in &look_at {
                let mut combined = false;
                for &j in &to_consider {
                    if parts_disjoint(&regions, &parts[j], &parts[i]) {
                        continue;
                    }
                    let union = Union::new(&merged[j], &merged[i]).execute();
                    merged[j] = union;
                    let absorbed = parts[i].clone();
                    parts[j].extend(absorbed);
                    combined = true;
                    changed = true;
                }
                if !combined {
                    to_consider.push(i);
                }
            }

            debug!(
                pass = passes,
                representatives = to_consider.len(),
                changed,
                "clustering pass finished"
            );

            if !changed {
                break;
            }
            look_at = to_consider[1..].to_vec();
        }

        let mut slots: Vec<Option<R>> = merged.into_iter().map(Some).collect();
        let representatives = to_consider
            .into_iter()
            .filter_map(|index| {
                let region = slots[index].take()?;
                Some(Representative {
                    index,
                    label: labels[index],
                    region,
                    members: parts[index].iter().map(|&p| labels[p]).collect(),
                })
            })
            .collect();

        Clusters {
            representatives,
            passes,
        }
    }
}

/// Returns `true` if no input region of `a` touches any input region of `b`.
fn parts_disjoint<R: RegionOps>(
    regions: &[R],
    a: &BTreeSet<usize>,
    b: &BTreeSet<usize>,
) -> bool {
    a.iter()
        .all(|&p| b.iter().all(|&q| regions[p].disjoint(&regions[q])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    /// Closed interval on the x axis; enough to exercise the scan order.
    #[derive(Debug, Clone, PartialEq)]
    struct Span {
        lo: f64,
        hi: f64,
    }

    fn span(lo: f64, hi: f64) -> Span {
        Span { lo, hi }
    }

    impl RegionOps for Span {
        fn disjoint(&self, other: &Self) -> bool {
            self.hi < other.lo || other.hi < self.lo
        }

        fn union_with(&self, other: &Self) -> Self {
            span(self.lo.min(other.lo), self.hi.max(other.hi))
        }

        fn exterior_points(&self) -> Vec<Vec<Point2>> {
            vec![vec![Point2::new(self.lo, 0.0), Point2::new(self.hi, 0.0)]]
        }
    }

    fn member_sets(clusters: &Clusters<Span>) -> Vec<Vec<usize>> {
        clusters
            .representatives
            .iter()
            .map(|r| r.members.iter().copied().collect())
            .collect()
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        let clusters = ClusterOverlaps::<Span>::new(Vec::new()).execute();
        assert!(clusters.is_empty());
        assert_eq!(clusters.passes, 0);
    }

    #[test]
    fn single_region_is_its_own_cluster() {
        let clusters = ClusterOverlaps::new(vec![span(0.0, 1.0)]).execute();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.passes, 1);
        assert_eq!(clusters.representatives[0].region, span(0.0, 1.0));
    }

    #[test]
    fn disjoint_regions_keep_input_order() {
        let clusters =
            ClusterOverlaps::new(vec![span(4.0, 5.0), span(0.0, 1.0), span(2.0, 3.0)]).execute();
        assert_eq!(clusters.passes, 1);
        let indices: Vec<usize> = clusters.representatives.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(clusters.representatives[1].region, span(0.0, 1.0));
    }

    #[test]
    fn chain_in_order_merges_in_one_pass() {
        let clusters =
            ClusterOverlaps::new(vec![span(0.0, 2.0), span(1.0, 4.0), span(3.0, 6.0)]).execute();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.representatives[0].region, span(0.0, 6.0));
        assert_eq!(member_sets(&clusters), vec![vec![0, 1, 2]]);
        assert_eq!(clusters.passes, 2);
    }

    #[test]
    fn bridge_region_joins_two_representatives() {
        // A and C are disjoint; B, scanned last, overlaps both.
        let clusters =
            ClusterOverlaps::new(vec![span(0.0, 2.0), span(3.0, 5.0), span(1.0, 4.0)]).execute();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters.representatives[0].index, 0);
        assert_eq!(clusters.representatives[0].region, span(0.0, 5.0));
        assert_eq!(member_sets(&clusters), vec![vec![0, 1, 2]]);
        assert_eq!(clusters.passes, 3);
    }

    #[test]
    fn separate_groups_stay_separate() {
        let clusters = ClusterOverlaps::new(vec![
            span(0.0, 1.0),
            span(10.0, 11.0),
            span(0.5, 2.0),
            span(10.5, 12.0),
            span(20.0, 21.0),
        ])
        .execute();
        assert_eq!(member_sets(&clusters), vec![vec![0, 2], vec![1, 3], vec![4]]);
        assert_eq!(clusters.representatives[0].region, span(0.0, 2.0));
        assert_eq!(clusters.representatives[1].region, span(10.0, 12.0));
    }

    #[test]
    fn later_pass_merges_grown_representatives() {
        // 1 and 2 only touch once both have absorbed region 3.
        let clusters = ClusterOverlaps::new(vec![
            span(100.0, 101.0),
            span(0.0, 1.0),
            span(5.0, 6.0),
            span(0.5, 5.5),
        ])
        .execute();
        assert_eq!(member_sets(&clusters), vec![vec![0], vec![1, 2, 3]]);
        assert_eq!(clusters.representatives[1].index, 1);
        assert_eq!(clusters.representatives[1].region, span(0.0, 6.0));
    }

    /// Interval whose union loses a sliver at both ends, like a backend that
    /// rounds output vertices.
    #[derive(Debug, Clone, PartialEq)]
    struct Rounded {
        lo: f64,
        hi: f64,
    }

    impl RegionOps for Rounded {
        fn disjoint(&self, other: &Self) -> bool {
            self.hi < other.lo || other.hi < self.lo
        }

        fn union_with(&self, other: &Self) -> Self {
            Rounded {
                lo: self.lo.min(other.lo) + 1e-9,
                hi: self.hi.max(other.hi) - 1e-9,
            }
        }

        fn exterior_points(&self) -> Vec<Vec<Point2>> {
            vec![vec![Point2::new(self.lo, 0.0), Point2::new(self.hi, 0.0)]]
        }
    }

    #[test]
    fn touching_an_absorbed_input_joins_despite_lossy_union() {
        // The third interval touches the first only at 2.0, which the
        // rounded union of the first two no longer covers.
        let clusters = ClusterOverlaps::new(vec![
            Rounded { lo: 0.0, hi: 2.0 },
            Rounded { lo: 1.0, hi: 1.5 },
            Rounded { lo: 2.0, hi: 3.0 },
        ])
        .execute();
        assert_eq!(clusters.len(), 1);
        let members: Vec<usize> = clusters.representatives[0].members.iter().copied().collect();
        assert_eq!(members, vec![0, 1, 2]);
    }

    #[test]
    fn labels_flow_into_members() {
        let clusters =
            ClusterOverlaps::labeled(vec![(3, span(0.0, 2.0)), (7, span(1.0, 3.0))]).execute();
        assert_eq!(clusters.representatives[0].label, 3);
        assert_eq!(member_sets(&clusters), vec![vec![3, 7]]);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let input = vec![span(0.0, 1.0), span(3.0, 4.0), span(0.5, 3.5), span(9.0, 9.5)];
        let first = ClusterOverlaps::new(input.clone()).execute();
        let second = ClusterOverlaps::new(input).execute();
        assert_eq!(member_sets(&first), member_sets(&second));
        let regions_a: Vec<Span> = first.representatives.into_iter().map(|r| r.region).collect();
        let regions_b: Vec<Span> = second.representatives.into_iter().map(|r| r.region).collect();
        assert_eq!(regions_a, regions_b);
    }
}
