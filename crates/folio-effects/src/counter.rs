//! Count-up animation for headline numbers (`0+` ... `50+`).

/// Number of frames a count-up takes.
pub const STEPS: u32 = 50;

/// Frames of a count-up towards `target`, each rendered as `N+`.
///
/// Every frame adds `target / STEPS` (fractional) and shows the floor; the
/// final frame is exactly `target+`.
pub fn frames(target: u32) -> Vec<String> {
    let increment = f64::from(target) / f64::from(STEPS);
    let mut out = Vec::with_capacity(STEPS as usize);
    let mut current = 0.0_f64;
    loop {
        current += increment;
        if current >= f64::from(target) {
            out.push(format!("{target}+"));
            return out;
        }
        out.push(format!("{}+", current.floor() as u32));
    }
}
