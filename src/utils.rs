use std::ops::Neg;

/// Entropy, in bits per symbol, of the distribution given by `distr` over `total_freq`.
/// Symbols with frequency 0 do not contribute.
pub fn entropy(distr: &[usize], total_freq: f64) -> f64 {
    let mut entropy = 0.0;

    for freq in distr {
        if *freq == 0 {
            continue;
        }
        let pr = *freq as f64 / total_freq;
        entropy += pr * f64::log2(pr);
    }
    entropy.neg()
}

/// Given the real probability distributions P and Q, calculates the cross entropy as follow:
/// ```text
/// cross-entropy(P|Q) = - ∑ p(x) * log(q(x))
/// ```
/// that is the average cost, in bits, of coding symbols drawn from P with a model built on Q.
pub fn cross_entropy(distr: &[usize], m: f64, other_distr: &[usize], other_m: f64) -> f64 {
    assert_eq!(distr.len(), other_distr.len(), "Distr must have same length!");

    let mut cross_entropy = 0.0;

    for index in 0..distr.len() {
        if distr[index] == 0 {
            continue;
        }
        let p_x = distr[index] as f64 / m;
        let q_x = other_distr[index] as f64 / other_m;
        cross_entropy += p_x * f64::log2(q_x);
    }
    cross_entropy.neg()
}
