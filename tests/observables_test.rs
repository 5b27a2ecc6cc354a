use ising_scan::lattice::Lattice;
use ising_scan::metropolis::{self, AcceptanceTable};
use ising_scan::observables::{energy, magnetization, Observables, OnlineStats};

use rand::SeedableRng;
use rand_pcg::Pcg64;

fn checkerboard(n: usize) -> Lattice {
    let spins = (0..n * n)
        .map(|i| if (i / n + i % n) % 2 == 0 { 1 } else { -1 })
        .collect();
    Lattice::from_spins(n, 1.0, spins).unwrap()
}

#[test]
fn test_aligned_energy_is_minus_two() {
    for n in [1, 2, 3, 8, 31] {
        let up = Lattice::uniform(n, 0.7, 1).unwrap();
        let down = Lattice::uniform(n, 0.7, -1).unwrap();
        assert_eq!(energy(&up), -2.0, "all up, n = {n}");
        assert_eq!(energy(&down), -2.0, "all down, n = {n}");
    }
}

#[test]
fn test_checkerboard_energy_is_plus_two() {
    // Only even sizes tile the torus without frustration.
    for n in [2, 4, 10] {
        assert_eq!(energy(&checkerboard(n)), 2.0, "n = {n}");
        assert_eq!(magnetization(&checkerboard(n)), 0.0, "n = {n}");
    }
}

#[test]
fn test_single_defect_energy() {
    // One flipped spin breaks four bonds: E = (-2N² + 8) / N².
    let n = 5;
    let mut lat = Lattice::uniform(n, 1.0, 1).unwrap();
    lat.flip(2, 3);
    let expected = (-2.0 * (n * n) as f64 + 8.0) / (n * n) as f64;
    assert!((energy(&lat) - expected).abs() < 1e-12);
}

#[test]
fn test_magnetization_of_aligned_lattice() {
    assert_eq!(magnetization(&Lattice::uniform(6, 1.0, 1).unwrap()), 1.0);
    assert_eq!(magnetization(&Lattice::uniform(6, 1.0, -1).unwrap()), -1.0);

    let mut lat = Lattice::uniform(6, 1.0, 1).unwrap();
    lat.flip(0, 0);
    let m = magnetization(&lat);
    assert!(m < 1.0 && m > -1.0);
}

#[test]
fn test_observables_stay_in_range_during_run() {
    let mut rng = Pcg64::seed_from_u64(42);
    let mut lat = Lattice::random(12, 0.35, &mut rng).unwrap();
    let table = AcceptanceTable::for_lattice(&lat);

    for _ in 0..200 {
        metropolis::sweep(&mut lat, &table, &mut rng);
        let obs = Observables::measure(&lat);
        assert!((-1.0..=1.0).contains(&obs.magnetization));
        assert!((-2.0..=2.0).contains(&obs.energy));
        assert!(obs.abs_magnetization() >= 0.0);
    }
}

#[test]
fn test_online_stats() {
    let mut stats = OnlineStats::default();
    for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
        stats.push(x);
    }
    assert_eq!(stats.count(), 8);
    assert!((stats.mean() - 5.0).abs() < 1e-12);
    // Sample variance: Σ(x - 5)² / 7 = 32 / 7.
    assert!((stats.var() - 32.0 / 7.0).abs() < 1e-12);

    let single = {
        let mut s = OnlineStats::default();
        s.push(3.0);
        s
    };
    assert_eq!(single.var(), 0.0);
}
