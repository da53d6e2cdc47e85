//! Singular Value Decomposition (SVD) of 2×2 and 3×3 matrices.
//!
//! For any square matrix A the SVD factors it as
//!
//! ```text
//! A = U Σ Vᵀ
//! ```
//!
//! where:
//! * U is an orthogonal matrix (left singular vectors)
//! * Σ is a diagonal matrix of singular values (σ₁ ≥ σ₂ ≥ σ₃ ≥ 0)
//! * V is an orthogonal matrix (right singular vectors)
//!
//! # Implementation Details
//!
//! The decomposition runs in double precision and follows three steps:
//! * cyclic Jacobi eigenanalysis of the symmetric matrix AᵀA, yielding V
//! * descending sort of the columns of B = A V, carrying V along
//! * QR decomposition of B with Givens rotations, yielding U and Σ
//!
//! Each Jacobi step zeroes one off-diagonal pair of AᵀA with an exact plane
//! rotation, so the factorization is accurate to machine precision for
//! well-conditioned inputs. V is always a proper rotation. U carries the sign
//! of det(A): if A contains a reflection it shows up in U, never in Σ.
//!
//! # Example
//!
//! ```
//! use glam::DMat3;
//! use vecmath_linalg::svd::svd3;
//!
//! let matrix = DMat3::from_cols_array(&[
//!     1.0, 0.0, 0.0,
//!     0.0, 2.0, 0.0,
//!     0.0, 0.0, 3.0,
//! ]);
//!
//! let svd_result = svd3(&matrix);
//! assert!((svd_result.s().x - 3.0).abs() < 1e-12);
//! ```
//!
//! # References
//!
//! * Press, Teukolsky, Vetterling, Flannery. "Numerical Recipes", §11.1,
//!   Jacobi transformations of a symmetric matrix.
//! * Golub, Van Loan. "Matrix Computations", QR factorization with Givens
//!   rotations.

use glam::{DMat2, DMat3, DVec2, DVec3};

const MAX_SWEEPS: usize = 16;

/// Relative size below which the off-diagonal mass counts as converged.
const JACOBI_TOLERANCE: f64 = f64::EPSILON * f64::EPSILON;

/// Smallest column norm treated as non-zero by the QR rotations.
const QR_EPSILON: f64 = f64::MIN_POSITIVE;

#[derive(Debug, Clone)]
/// A symmetric 3x3 matrix stored in full, kept symmetric by every rotation.
struct Symmetric3x3 {
    m: [[f64; 3]; 3],
}

impl Symmetric3x3 {
    /// Builds the normal matrix AᵀA.
    fn normal_matrix(a: &DMat3) -> Self {
        let ata = a.transpose() * *a;
        let cols = [ata.x_axis, ata.y_axis, ata.z_axis];
        let mut m = [[0.0; 3]; 3];
        for (c, col) in cols.iter().enumerate() {
            m[0][c] = col.x;
            m[1][c] = col.y;
            m[2][c] = col.z;
        }
        Self { m }
    }

    fn off_diagonal_norm_sq(&self) -> f64 {
        let m = &self.m;
        m[1][0] * m[1][0] + m[2][0] * m[2][0] + m[2][1] * m[2][1]
    }

    fn diagonal_norm_sq(&self) -> f64 {
        let m = &self.m;
        m[0][0] * m[0][0] + m[1][1] * m[1][1] + m[2][2] * m[2][2]
    }
}

#[derive(Debug)]
/// Helper struct to store 2 floats to avoid OUT parameters on functions
struct Givens {
    /// The cosine of the angle in the Givens rotation.
    cos_theta: f64,

    /// The sine of the angle in the Givens rotation.
    sin_theta: f64,
}

#[derive(Debug, Clone, Copy)]
/// The SVD of a 3x3 matrix: `A = U * diag(s) * V^T`.
pub struct Svd3 {
    /// The matrix of left singular vectors.
    u: DMat3,

    /// The singular values in descending order.
    s: DVec3,

    /// The matrix of right singular vectors.
    v: DMat3,
}

impl Svd3 {
    /// Get the left singular vectors matrix.
    #[inline]
    pub fn u(&self) -> &DMat3 {
        &self.u
    }

    /// Get the singular values, sorted in descending order.
    #[inline]
    pub fn s(&self) -> &DVec3 {
        &self.s
    }

    /// Get the right singular vectors matrix.
    #[inline]
    pub fn v(&self) -> &DMat3 {
        &self.v
    }

    /// The closest orthogonal matrix to A, `U * V^T`.
    #[inline]
    pub fn orthogonal_factor(&self) -> DMat3 {
        self.u * self.v.transpose()
    }
}

#[derive(Debug, Clone, Copy)]
/// The SVD of a 2x2 matrix: `A = U * diag(s) * V^T`.
pub struct Svd2 {
    u: DMat2,
    s: DVec2,
    v: DMat2,
}

impl Svd2 {
    /// Get the left singular vectors matrix.
    #[inline]
    pub fn u(&self) -> &DMat2 {
        &self.u
    }

    /// Get the singular values, sorted in descending order.
    #[inline]
    pub fn s(&self) -> &DVec2 {
        &self.s
    }

    /// Get the right singular vectors matrix.
    #[inline]
    pub fn v(&self) -> &DMat2 {
        &self.v
    }

    /// The closest orthogonal matrix to A, `U * V^T`.
    #[inline]
    pub fn orthogonal_factor(&self) -> DMat2 {
        self.u * self.v.transpose()
    }
}

/// Exact Jacobi rotation parameters `(t, c, s)` annihilating `a_pq`.
#[inline]
fn jacobi_rotation(a_pp: f64, a_qq: f64, a_pq: f64) -> (f64, f64, f64) {
    let theta = (a_qq - a_pp) / (2.0 * a_pq);
    // theta^2 overflows for nearly diagonal blocks
    let t = if theta.abs() > 1e150 {
        0.5 / theta
    } else {
        let t = 1.0 / (theta.abs() + (theta * theta + 1.0).sqrt());
        if theta < 0.0 {
            -t
        } else {
            t
        }
    };
    let c = 1.0 / (t * t + 1.0).sqrt();
    (t, c, t * c)
}

/// Zeroes `s[p][q]` with `s' = P^T s P` and accumulates `v' = v P`.
fn rotate(s: &mut Symmetric3x3, v: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let a_pq = s.m[p][q];
    if a_pq == 0.0 {
        return;
    }
    let (t, c, sn) = jacobi_rotation(s.m[p][p], s.m[q][q], a_pq);

    s.m[p][p] -= t * a_pq;
    s.m[q][q] += t * a_pq;
    s.m[p][q] = 0.0;
    s.m[q][p] = 0.0;

    let r = 3 - p - q;
    let a_rp = s.m[r][p];
    let a_rq = s.m[r][q];
    s.m[r][p] = c * a_rp - sn * a_rq;
    s.m[p][r] = s.m[r][p];
    s.m[r][q] = sn * a_rp + c * a_rq;
    s.m[q][r] = s.m[r][q];

    for row in v.iter_mut() {
        let v_kp = row[p];
        let v_kq = row[q];
        row[p] = c * v_kp - sn * v_kq;
        row[q] = sn * v_kp + c * v_kq;
    }
}

/// Eigenvectors of a symmetric matrix, as the columns of the returned matrix.
fn jacobi_eigenanalysis(mut s: Symmetric3x3) -> DMat3 {
    let mut v = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    let mut converged = false;
    for _ in 0..MAX_SWEEPS {
        let off = s.off_diagonal_norm_sq();
        if off == 0.0 || off <= JACOBI_TOLERANCE * s.diagonal_norm_sq() {
            converged = true;
            break;
        }
        rotate(&mut s, &mut v, 0, 1);
        rotate(&mut s, &mut v, 1, 2);
        rotate(&mut s, &mut v, 0, 2);
    }
    if !converged {
        log::warn!(
            "jacobi eigenanalysis did not converge after {MAX_SWEEPS} sweeps (off-diagonal {:e})",
            s.off_diagonal_norm_sq()
        );
    }
    DMat3::from_cols(
        DVec3::new(v[0][0], v[1][0], v[2][0]),
        DVec3::new(v[0][1], v[1][1], v[2][1]),
        DVec3::new(v[0][2], v[1][2], v[2][2]),
    )
}

/// Helper function used to swap X with Y and Y with X if c == true
#[inline(always)]
fn cond_swap<T: Copy>(c: bool, x: &mut T, y: &mut T) {
    if c {
        std::mem::swap(x, y);
    }
}

/// Sorts the columns of `b` by descending norm and applies the same permutation to `v`.
///
/// Every swap negates one of the exchanged columns so that `v` stays a proper rotation.
fn sort_singular_values(b: &mut DMat3, v: &mut DMat3) {
    let mut rho1 = b.x_axis.length_squared();
    let mut rho2 = b.y_axis.length_squared();
    let mut rho3 = b.z_axis.length_squared();

    let c1 = rho1 < rho2;
    cond_swap(c1, &mut rho1, &mut rho2);
    cond_swap(c1, &mut b.x_axis, &mut b.y_axis);
    cond_swap(c1, &mut v.x_axis, &mut v.y_axis);
    if c1 {
        b.y_axis = -b.y_axis;
        v.y_axis = -v.y_axis;
    }

    let c2 = rho1 < rho3;
    cond_swap(c2, &mut rho1, &mut rho3);
    cond_swap(c2, &mut b.x_axis, &mut b.z_axis);
    cond_swap(c2, &mut v.x_axis, &mut v.z_axis);
    if c2 {
        b.z_axis = -b.z_axis;
        v.z_axis = -v.z_axis;
    }

    let c3 = rho2 < rho3;
    cond_swap(c3, &mut b.y_axis, &mut b.z_axis);
    cond_swap(c3, &mut v.y_axis, &mut v.z_axis);
    if c3 {
        b.z_axis = -b.z_axis;
        v.z_axis = -v.z_axis;
    }
}

/// Half-angle Givens rotation that maps `(a1, a2)` onto the first axis.
#[inline]
fn qr_givens_quaternion(a1: f64, a2: f64) -> Givens {
    let rho = a1.hypot(a2);

    let mut g = Givens {
        cos_theta: a1.abs() + rho.max(QR_EPSILON),
        sin_theta: if rho > QR_EPSILON { a2 } else { 0.0 },
    };

    cond_swap(a1 < 0.0, &mut g.sin_theta, &mut g.cos_theta);

    let w = g.cos_theta.hypot(g.sin_theta).recip();
    g.cos_theta *= w;
    g.sin_theta *= w;
    g
}

/// Full-angle `(cos, sin)` of a half-angle Givens rotation.
#[inline]
fn full_angle(g: &Givens) -> (f64, f64) {
    (
        1.0 - 2.0 * g.sin_theta * g.sin_theta,
        2.0 * g.cos_theta * g.sin_theta,
    )
}

/// Applies the transposed rotation of rows `i` and `j` to every column.
#[inline]
fn rotate_rows(b: &mut DMat3, i: usize, j: usize, c: f64, s: f64) {
    for col in [&mut b.x_axis, &mut b.y_axis, &mut b.z_axis] {
        let c0 = col[i];
        let c1 = col[j];
        col[i] = c * c0 + s * c1;
        col[j] = -s * c0 + c * c1;
    }
}

/// QR decomposition of `b` using Givens rotations. Returns `(Q, R)`.
fn qr_decomposition(mut b: DMat3) -> (DMat3, DMat3) {
    // zero out b[1][0]
    let (a1, b1) = full_angle(&qr_givens_quaternion(b.x_axis.x, b.x_axis.y));
    rotate_rows(&mut b, 0, 1, a1, b1);

    // zero out b[2][0]
    let (a2, b2) = full_angle(&qr_givens_quaternion(b.x_axis.x, b.x_axis.z));
    rotate_rows(&mut b, 0, 2, a2, b2);

    // zero out b[2][1]
    let (a3, b3) = full_angle(&qr_givens_quaternion(b.y_axis.y, b.y_axis.z));
    rotate_rows(&mut b, 1, 2, a3, b3);

    let q1 = DMat3::from_cols(DVec3::new(a1, b1, 0.0), DVec3::new(-b1, a1, 0.0), DVec3::Z);
    let q2 = DMat3::from_cols(DVec3::new(a2, 0.0, b2), DVec3::Y, DVec3::new(-b2, 0.0, a2));
    let q3 = DMat3::from_cols(DVec3::X, DVec3::new(0.0, a3, b3), DVec3::new(0.0, -b3, a3));

    (q1 * q2 * q3, b)
}

/// Computes the SVD of a 3x3 matrix.
pub fn svd3(a: &DMat3) -> Svd3 {
    // V holds the eigenvectors of A^T * A (right singular vectors)
    let mut v = jacobi_eigenanalysis(Symmetric3x3::normal_matrix(a));
    let mut b = *a * v;

    sort_singular_values(&mut b, &mut v);

    let (mut u, r) = qr_decomposition(b);
    let diag = [r.x_axis.x, r.y_axis.y, r.z_axis.z];
    for (i, d) in diag.iter().enumerate() {
        if *d < 0.0 {
            let col = u.col_mut(i);
            *col = -*col;
        }
    }

    Svd3 {
        u,
        s: DVec3::new(diag[0].abs(), diag[1].abs(), diag[2].abs()),
        v,
    }
}

/// Computes the SVD of a 2x2 matrix.
pub fn svd2(a: &DMat2) -> Svd2 {
    let ata = a.transpose() * *a;
    let (a_pp, a_qq, a_pq) = (ata.x_axis.x, ata.y_axis.y, ata.y_axis.x);

    let mut v = if a_pq == 0.0 {
        DMat2::IDENTITY
    } else {
        let (_, c, s) = jacobi_rotation(a_pp, a_qq, a_pq);
        DMat2::from_cols(DVec2::new(c, -s), DVec2::new(s, c))
    };
    let mut b = *a * v;

    if b.x_axis.length_squared() < b.y_axis.length_squared() {
        std::mem::swap(&mut b.x_axis, &mut b.y_axis);
        std::mem::swap(&mut v.x_axis, &mut v.y_axis);
        b.y_axis = -b.y_axis;
        v.y_axis = -v.y_axis;
    }

    let (c, s) = full_angle(&qr_givens_quaternion(b.x_axis.x, b.x_axis.y));
    let r00 = c * b.x_axis.x + s * b.x_axis.y;
    let r11 = -s * b.y_axis.x + c * b.y_axis.y;
    let mut u = DMat2::from_cols(DVec2::new(c, s), DVec2::new(-s, c));

    if r00 < 0.0 {
        u.x_axis = -u.x_axis;
    }
    if r11 < 0.0 {
        u.y_axis = -u.y_axis;
    }

    Svd2 {
        u,
        s: DVec2::new(r00.abs(), r11.abs()),
        v,
    }
}
