//! P-256 Point Representations and Group Operations
//!
//! Affine (x, y) and Jacobian (X, Y, Z) points are separate types joined
//! only by explicit conversions; the formulas never interoperate the two
//! silently. The point at infinity is an explicit flag on both types, never
//! an error path.
//!
//! Affine addition and doubling each pay one field inversion and are used
//! only where a fixed point must be repeatedly doubled. The Jacobian
//! doubling and the mixed Jacobian+affine addition are inversion-free and
//! carry the inner loops of every scalar-multiplication variant.

use super::field::FieldElement;
use super::params;

/// Affine point (x, y) on y² = x³ - 3x + b, or the point at infinity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// x-coordinate; meaningless when `infinity` is set
    pub x: FieldElement,
    /// y-coordinate; meaningless when `infinity` is set
    pub y: FieldElement,
    /// Identity flag
    pub infinity: bool,
}

impl AffinePoint {
    /// Point at infinity (identity)
    pub fn infinity() -> Self {
        AffinePoint {
            x: FieldElement::zero(),
            y: FieldElement::zero(),
            infinity: true,
        }
    }

    /// Create from coordinates
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        AffinePoint {
            x,
            y,
            infinity: false,
        }
    }

    /// Generator point G
    pub fn generator() -> Self {
        AffinePoint {
            x: FieldElement::from_limbs(params::generator_x()),
            y: FieldElement::from_limbs(params::generator_y()),
            infinity: false,
        }
    }

    /// Check if point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Check if the point satisfies y² = x³ - 3x + b (mod p)
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }
        let y2 = self.y.square();
        let a = FieldElement::from_limbs(params::coeff_a());
        let b = FieldElement::from_limbs(params::coeff_b());
        let rhs = self.x.square().mul(&self.x).add(&a.mul(&self.x)).add(&b);
        y2 == rhs
    }

    /// Convert to Jacobian coordinates: (x, y) -> (x, y, 1)
    pub fn to_jacobian(&self) -> JacobianPoint {
        if self.infinity {
            JacobianPoint::infinity()
        } else {
            JacobianPoint {
                x: self.x,
                y: self.y,
                z: FieldElement::one(),
                infinity: false,
            }
        }
    }

    /// Point addition via the chord formula, one field inversion
    ///
    /// Equal x-coordinates route to doubling when the points coincide
    /// (and y != 0), otherwise the points are inverses and the result is
    /// the identity.
    pub fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return *other;
        }
        if other.infinity {
            return *self;
        }

        if self.x == other.x {
            if self.y == other.y && !self.y.is_zero() {
                return self.double();
            }
            return Self::infinity();
        }

        // lambda = (Qy - Py) / (Qx - Px)
        let num = other.y.sub(&self.y);
        let den = other.x.sub(&self.x);
        let lambda = num.mul(&den.inverse().unwrap());

        let rx = lambda.square().sub(&self.x).sub(&other.x);
        let ry = self.x.sub(&rx).mul(&lambda).sub(&self.y);
        AffinePoint::new(rx, ry)
    }

    /// Point doubling via the tangent formula, one field inversion
    ///
    /// A point with y = 0 has order two, so its double is the identity;
    /// the tangent there is vertical.
    pub fn double(&self) -> Self {
        if self.infinity || self.y.is_zero() {
            return Self::infinity();
        }

        // lambda = (3·Px² + a) / 2·Py
        let a = FieldElement::from_limbs(params::coeff_a());
        let num = self.x.square().triple().add(&a);
        let den = self.y.double();
        let lambda = num.mul(&den.inverse().unwrap());

        let rx = lambda.square().sub(&self.x).sub(&self.x);
        let ry = self.x.sub(&rx).mul(&lambda).sub(&self.y);
        AffinePoint::new(rx, ry)
    }
}

/// Jacobian point (X, Y, Z); the affine point is (X/Z², Y/Z³)
///
/// Invariant: Z != 0 unless `infinity` is set.
#[derive(Clone, Copy, Debug)]
pub struct JacobianPoint {
    /// X-coordinate
    pub x: FieldElement,
    /// Y-coordinate
    pub y: FieldElement,
    /// Z-coordinate
    pub z: FieldElement,
    /// Identity flag
    pub infinity: bool,
}

impl JacobianPoint {
    /// Point at infinity (identity)
    pub fn infinity() -> Self {
        JacobianPoint {
            x: FieldElement::one(),
            y: FieldElement::one(),
            z: FieldElement::one(),
            infinity: true,
        }
    }

    /// Check if point at infinity
    pub fn is_infinity(&self) -> bool {
        self.infinity
    }

    /// Convert to affine coordinates: (X, Y, Z) -> (X/Z², Y/Z³)
    ///
    /// Pays two full binary-GCD inversions (of Z² and Z³); callers invoke
    /// this once at the very end of a scalar multiplication, never inside
    /// the inner loop.
    pub fn to_affine(&self) -> AffinePoint {
        if self.infinity {
            return AffinePoint::infinity();
        }

        let z2 = self.z.square();
        let z3 = z2.mul(&self.z);
        let z2_inv = z2.inverse().unwrap();
        let z3_inv = z3.inverse().unwrap();

        AffinePoint::new(self.x.mul(&z2_inv), self.y.mul(&z3_inv))
    }

    /// Point doubling, inversion-free (a = -3 formulas)
    ///
    /// The 8y⁴ intermediate is produced by halving 16y⁴ mod p; the halving
    /// goes through (v + p) >> 1 for odd residues so the value stays a
    /// field element.
    pub fn double(&self) -> Self {
        if self.infinity {
            return Self::infinity();
        }

        let mut t1 = self.z.square();
        let mut t2 = self.x.sub(&t1);
        t1 = self.x.add(&t1);
        t2 = t2.mul(&t1); // x² - z⁴
        let mut t3 = t2.double();
        t2 = t2.add(&t3); // alpha = 3(x² - z⁴)

        let mut ry = self.y.double();
        let rz = ry.mul(&self.z); // Z3 = 2yz
        ry = ry.square(); // 4y²
        t3 = ry.mul(&self.x); // 4xy²
        ry = ry.square(); // 16y⁴
        ry = ry.halve(); // 8y⁴

        let mut rx = t2.square(); // alpha²
        t1 = t3.double();
        rx = rx.sub(&t1); // X3 = alpha² - 8xy²
        t1 = t3.sub(&rx);
        t1 = t1.mul(&t2);
        ry = t1.sub(&ry); // Y3 = alpha·(4xy² - X3) - 8y⁴

        JacobianPoint {
            x: rx,
            y: ry,
            z: rz,
            infinity: false,
        }
    }

    /// Mixed addition: Jacobian P plus affine Q (implicit Z = 1)
    ///
    /// Edge cases in priority order: P infinite lifts Q; Q infinite keeps
    /// P; both cross terms zero means P and Q are the same affine point and
    /// the doubling formula takes over (the generic formula would divide by
    /// zero); only the x cross term zero means P = -Q and the result is the
    /// identity.
    pub fn add_affine(&self, other: &AffinePoint) -> Self {
        if self.infinity {
            return other.to_jacobian();
        }
        if other.infinity {
            return *self;
        }

        let mut t1 = self.z.square();
        let mut t2 = t1.mul(&self.z);
        t1 = t1.mul(&other.x);
        t2 = t2.mul(&other.y);
        t1 = t1.sub(&self.x); // H  = Qx·Z² - X
        t2 = t2.sub(&self.y); // R  = Qy·Z³ - Y

        if t1.is_zero() {
            if t2.is_zero() {
                return other.to_jacobian().double();
            }
            return Self::infinity();
        }

        let rz = self.z.mul(&t1); // Z3 = Z·H
        let mut t3 = t1.square(); // H²
        let t4 = t3.mul(&t1); // H³
        t3 = t3.mul(&self.x); // X·H²
        t1 = t3.double();
        let mut rx = t2.square(); // R²
        rx = rx.sub(&t1);
        rx = rx.sub(&t4); // X3 = R² - 2XH² - H³
        t3 = t3.sub(&rx);
        t3 = t3.mul(&t2);
        let t4 = t4.mul(&self.y);
        let ry = t3.sub(&t4); // Y3 = R·(XH² - X3) - Y·H³

        JacobianPoint {
            x: rx,
            y: ry,
            z: rz,
            infinity: false,
        }
    }
}

impl PartialEq for JacobianPoint {
    fn eq(&self, other: &Self) -> bool {
        if self.infinity && other.infinity {
            return true;
        }
        if self.infinity || other.infinity {
            return false;
        }

        // (X1, Y1, Z1) == (X2, Y2, Z2) iff
        // X1·Z2² == X2·Z1² and Y1·Z2³ == Y2·Z1³
        let z1_2 = self.z.square();
        let z1_3 = z1_2.mul(&self.z);
        let z2_2 = other.z.square();
        let z2_3 = z2_2.mul(&other.z);

        self.x.mul(&z2_2) == other.x.mul(&z1_2) && self.y.mul(&z2_3) == other.y.mul(&z1_3)
    }
}

impl Eq for JacobianPoint {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_on_curve() {
        assert!(AffinePoint::generator().is_on_curve());
        assert!(AffinePoint::infinity().is_on_curve());
    }

    #[test]
    fn test_conversion_roundtrip() {
        let g = AffinePoint::generator();
        assert_eq!(g.to_jacobian().to_affine(), g);

        let inf = JacobianPoint::infinity();
        assert!(inf.to_affine().is_infinity());
        assert!(AffinePoint::infinity().to_jacobian().is_infinity());
    }

    #[test]
    fn test_affine_add_identity() {
        let g = AffinePoint::generator();
        let inf = AffinePoint::infinity();
        assert_eq!(g.add(&inf), g);
        assert_eq!(inf.add(&g), g);
        assert!(inf.add(&inf).is_infinity());
    }

    #[test]
    fn test_affine_add_commutes() {
        let g = AffinePoint::generator();
        let g2 = g.double();
        assert_eq!(g.add(&g2), g2.add(&g));
    }

    #[test]
    fn test_affine_add_equal_points_doubles() {
        let g = AffinePoint::generator();
        assert_eq!(g.add(&g), g.double());
    }

    #[test]
    fn test_affine_add_inverse_points() {
        let g = AffinePoint::generator();
        let neg_g = AffinePoint::new(g.x, g.y.neg());
        assert!(g.add(&neg_g).is_infinity());
        assert!(neg_g.add(&g).is_infinity());
    }

    #[test]
    fn test_affine_double_order_two() {
        // y = 0 means order two: doubling gives the identity
        let p = AffinePoint::new(FieldElement::from_u64(5), FieldElement::zero());
        assert!(p.double().is_infinity());
        assert!(AffinePoint::infinity().double().is_infinity());
        // and adding such a point to itself agrees
        assert!(p.add(&p).is_infinity());
    }

    #[test]
    fn test_double_g_known_answer() {
        // standard published value for 2G on NIST P-256
        let g2 = AffinePoint::generator().double();
        assert_eq!(
            g2.x.to_bytes_be().as_slice(),
            hex::decode("7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978")
                .unwrap()
                .as_slice()
        );
        assert_eq!(
            g2.y.to_bytes_be().as_slice(),
            hex::decode("07775510db8ed040293d9ac69f7430dbba7dade63ce982299e04b79d227873d1")
                .unwrap()
                .as_slice()
        );
        assert!(g2.is_on_curve());
    }

    #[test]
    fn test_jacobian_double_matches_affine() {
        let g = AffinePoint::generator();
        let jacobian = g.to_jacobian().double().to_affine();
        assert_eq!(jacobian, g.double());
    }

    #[test]
    fn test_jacobian_double_infinity() {
        assert!(JacobianPoint::infinity().double().is_infinity());
    }

    #[test]
    fn test_mixed_add_edge_cases() {
        let g = AffinePoint::generator();
        let inf = JacobianPoint::infinity();

        // P infinite: result is Q lifted
        assert_eq!(inf.add_affine(&g), g.to_jacobian());

        // Q infinite: result is P
        let p = g.to_jacobian().double();
        assert_eq!(p.add_affine(&AffinePoint::infinity()), p);

        // same point: routed to doubling
        assert_eq!(g.to_jacobian().add_affine(&g), g.to_jacobian().double());

        // inverse point: identity
        let neg_g = AffinePoint::new(g.x, g.y.neg());
        assert!(g.to_jacobian().add_affine(&neg_g).is_infinity());
    }

    #[test]
    fn test_mixed_add_matches_affine_add() {
        let g = AffinePoint::generator();
        let g2 = g.double();
        let g3_mixed = g2.to_jacobian().add_affine(&g).to_affine();
        assert_eq!(g3_mixed, g2.add(&g));
        assert!(g3_mixed.is_on_curve());
    }
}
