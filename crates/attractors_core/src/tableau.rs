//! Butcher tableaus for the explicit Runge–Kutta methods.

/// Coefficients of an explicit Runge–Kutta scheme.
///
/// `a[i]` holds the coefficients of stage `i` on stages `0..i`. `error`, when
/// present, holds `b − b̂` of the embedded lower-order solution.
#[derive(Debug)]
pub struct Tableau {
    pub name: &'static str,
    pub c: &'static [f64],
    pub a: &'static [&'static [f64]],
    pub b: &'static [f64],
    pub error: Option<&'static [f64]>,
    /// Last stage is evaluated at the accepted state and reused as the next first stage.
    pub fsal: bool,
    /// Order of the propagated solution.
    pub order: u32,
}

impl Tableau {
    pub fn stages(&self) -> usize {
        self.c.len()
    }

    pub fn is_adaptive(&self) -> bool {
        self.error.is_some()
    }
}

/// Classic Runge–Kutta 4th order.
pub const RK4: Tableau = Tableau {
    name: "rk4",
    c: &[0.0, 0.5, 0.5, 1.0],
    a: &[&[], &[0.5], &[0.0, 0.5], &[0.0, 0.0, 1.0]],
    b: &[1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
    error: None,
    fsal: false,
    order: 4,
};

/// Tsitouras 5(4).
pub const TSIT5: Tableau = Tableau {
    name: "tsit5",
    c: &[0.0, 0.161, 0.327, 0.9, 0.9800255409045097, 1.0, 1.0],
    a: &[
        &[],
        &[0.161],
        &[-0.008480655492356989, 0.335480655492357],
        &[2.897153057105493, -6.359448489975075, 4.3622954328695815],
        &[
            5.325864828439257,
            -11.748883564062828,
            7.4955393428898365,
            -0.09249506636175525,
        ],
        &[
            5.86145544294642,
            -12.92096931784711,
            8.159367898576159,
            -0.071584973281401,
            -0.028269050394068383,
        ],
        &[
            0.09646076681806523,
            0.01,
            0.4798896504144996,
            1.379008574103742,
            -3.290069515436081,
            2.324710524099774,
        ],
    ],
    b: &[
        0.09646076681806523,
        0.01,
        0.4798896504144996,
        1.379008574103742,
        -3.290069515436081,
        2.324710524099774,
        0.0,
    ],
    error: Some(&[
        -0.00178001105222577714,
        -0.0008164344596567469,
        0.007880878010261995,
        -0.1447110071732629,
        0.5823571654525552,
        -0.45808210592918697,
        0.015151515151515152,
    ]),
    fsal: true,
    order: 5,
};

/// Dormand–Prince 5(4).
pub const DOPRI5: Tableau = Tableau {
    name: "dopri5",
    c: &[0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0],
    a: &[
        &[],
        &[1.0 / 5.0],
        &[3.0 / 40.0, 9.0 / 40.0],
        &[44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0],
        &[
            19372.0 / 6561.0,
            -25360.0 / 2187.0,
            64448.0 / 6561.0,
            -212.0 / 729.0,
        ],
        &[
            9017.0 / 3168.0,
            -355.0 / 33.0,
            46732.0 / 5247.0,
            49.0 / 176.0,
            -5103.0 / 18656.0,
        ],
        &[
            35.0 / 384.0,
            0.0,
            500.0 / 1113.0,
            125.0 / 192.0,
            -2187.0 / 6784.0,
            11.0 / 84.0,
        ],
    ],
    b: &[
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
        0.0,
    ],
    error: Some(&[
        71.0 / 57600.0,
        0.0,
        -71.0 / 16695.0,
        71.0 / 1920.0,
        -17253.0 / 339200.0,
        22.0 / 525.0,
        -1.0 / 40.0,
    ]),
    fsal: true,
    order: 5,
};

#[cfg(test)]
mod tests {
    use super::{Tableau, DOPRI5, RK4, TSIT5};

    fn check_consistency(tableau: &Tableau) {
        let s = tableau.stages();
        assert_eq!(tableau.a.len(), s, "{}: a rows", tableau.name);
        assert_eq!(tableau.b.len(), s, "{}: b length", tableau.name);
        for (i, row) in tableau.a.iter().enumerate() {
            assert_eq!(row.len(), i, "{}: row {} length", tableau.name, i);
            let sum: f64 = row.iter().sum();
            assert!(
                (sum - tableau.c[i]).abs() < 1e-12,
                "{}: row {} sums to {} instead of c = {}",
                tableau.name,
                i,
                sum,
                tableau.c[i]
            );
        }
        let b_sum: f64 = tableau.b.iter().sum();
        assert!((b_sum - 1.0).abs() < 1e-12, "{}: b sums to {}", tableau.name, b_sum);
        if let Some(error) = tableau.error {
            assert_eq!(error.len(), s);
            let e_sum: f64 = error.iter().sum();
            assert!(e_sum.abs() < 1e-12, "{}: error weights sum to {}", tableau.name, e_sum);
        }
        if tableau.fsal {
            assert_eq!(tableau.a[s - 1], &tableau.b[..s - 1]);
        }
    }

    fn check_order_conditions(tableau: &Tableau) {
        let (a, b, c) = (tableau.a, tableau.b, tableau.c);
        let s = tableau.stages();
        let bc: f64 = (0..s).map(|i| b[i] * c[i]).sum();
        let bc2: f64 = (0..s).map(|i| b[i] * c[i] * c[i]).sum();
        let bc3: f64 = (0..s).map(|i| b[i] * c[i].powi(3)).sum();
        let bac: f64 = (0..s)
            .map(|i| b[i] * a[i].iter().zip(c).map(|(aij, cj)| aij * cj).sum::<f64>())
            .sum();
        for (value, expected, label) in [
            (bc, 1.0 / 2.0, "sum b c"),
            (bc2, 1.0 / 3.0, "sum b c^2"),
            (bac, 1.0 / 6.0, "sum b a c"),
            (bc3, 1.0 / 4.0, "sum b c^3"),
        ] {
            assert!(
                (value - expected).abs() < 1e-12,
                "{}: {} = {}, expected {}",
                tableau.name,
                label,
                value,
                expected
            );
        }
    }

    #[test]
    fn tableaus_are_consistent() {
        check_consistency(&RK4);
        check_consistency(&TSIT5);
        check_consistency(&DOPRI5);
    }

    #[test]
    fn tableaus_satisfy_order_conditions() {
        check_order_conditions(&RK4);
        check_order_conditions(&TSIT5);
        check_order_conditions(&DOPRI5);
    }
}
