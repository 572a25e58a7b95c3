//! Analytic reference solutions for checking the numerical integrators.

use nalgebra::Vector2;

use crate::pendulum::damped_pendulum::DampedPendulumParams;

/// Small-angle approximation of the damped pendulum, where `sin(theta) ~= theta`:
///
/// theta_ddot + 2 * xi * omega * theta_dot + omega^2 * theta = 0
pub struct LinearizedPendulum {
    pub xi: f64,    // damping ratio
    pub omega: f64, // natural frequency
}

impl LinearizedPendulum {
    pub fn from_params(params: &DampedPendulumParams) -> LinearizedPendulum {
        let omega = (params.gravity / params.length).sqrt();
        LinearizedPendulum {
            xi: params.damping / (2.0 * omega),
            omega,
        }
    }

    /// Computes theta(t) when released from rest at `initial_angle`.
    pub fn evaluate_solution(&self, t: f64, initial_angle: f64) -> f64 {
        let decay = if self.xi == 1.0 {
            self.critically_damped(t)
        } else if self.xi > 1.0 {
            self.overdamped(t)
        } else {
            self.underdamped(t)
        };
        initial_angle * decay
    }

    /// xi == 1.0
    fn critically_damped(&self, t: f64) -> f64 {
        let w = self.omega;
        (1.0 + w * t) * (-w * t).exp()
    }

    /// xi > 1.0
    fn overdamped(&self, t: f64) -> f64 {
        let xi = self.xi;
        let w = self.omega;
        let alpha1 = -xi + (xi * xi - 1.0).sqrt();
        let alpha2 = -xi - (xi * xi - 1.0).sqrt();
        let a = alpha2 / (alpha2 - alpha1);
        let b = -alpha1 / (alpha2 - alpha1);
        a * (alpha1 * w * t).exp() + b * (alpha2 * w * t).exp()
    }

    /// xi < 1.0
    fn underdamped(&self, t: f64) -> f64 {
        let xi = self.xi;
        let w = self.omega;
        let omega_d = w * (1.0 - xi * xi).sqrt();
        let damping_factor = (-xi * w * t).exp();
        let cosine = (omega_d * t).cos();
        let sine = (omega_d * t).sin();
        damping_factor * (cosine + (xi / (1.0 - xi * xi).sqrt()) * sine)
    }

    /// Linear dynamics in the form expected by the RK4 solver.
    pub fn system_dynamics(&self) -> impl Fn(f64, Vector2<f64>) -> Vector2<f64> {
        let k_p = self.omega * self.omega;
        let k_d = 2.0 * self.xi * self.omega;

        move |_, state: Vector2<f64>| {
            let theta = state[0];
            let theta_dot = state[1];
            Vector2::new(theta_dot, -k_p * theta - k_d * theta_dot)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solution_starts_at_rest_from_initial_angle() {
        let eps = 1e-7;
        for &damping in &[0.0, 0.5, 2.0 * 9.81_f64.sqrt(), 12.0] {
            let params = DampedPendulumParams {
                damping,
                ..Default::default()
            };
            let model = LinearizedPendulum::from_params(&params);
            let x0 = model.evaluate_solution(0.0, 0.2);
            let v0 = (model.evaluate_solution(eps, 0.2) - x0) / eps;
            assert_relative_eq!(x0, 0.2, epsilon = 1e-12);
            assert_relative_eq!(v0, 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_undamped_period() {
        let params = DampedPendulumParams {
            damping: 0.0,
            ..Default::default()
        };
        let model = LinearizedPendulum::from_params(&params);
        let period = 2.0 * std::f64::consts::PI / model.omega;
        assert_relative_eq!(model.evaluate_solution(period, 0.1), 0.1, epsilon = 1e-12);
        assert_relative_eq!(
            model.evaluate_solution(0.5 * period, 0.1),
            -0.1,
            epsilon = 1e-12
        );
    }
}
