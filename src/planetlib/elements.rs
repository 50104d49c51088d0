//! Mean orbital elements of the planets
//!
//! Each angular element is a polynomial in Julian centuries from 1900
//! January 0.5, coefficients in degrees. Pluto has only constant elements
//! and a mean motion, so its argument of perihelion and mean anomaly are
//! derived from the other elements.

use super::Body;

/// Polynomial coefficients for one planet
#[derive(Debug, Clone, Copy)]
pub(crate) struct ElementTable {
    pub mean_longitude: [f64; 4],
    pub longitude_of_perihelion: [f64; 4],
    pub argument_of_perihelion: Option<[f64; 4]>,
    pub eccentricity: [f64; 4],
    pub inclination: [f64; 4],
    pub ascending_node: [f64; 4],
    pub mean_anomaly: Option<[f64; 3]>,
    /// AU
    pub semi_major_axis: f64,
    /// Arcseconds at 1 AU
    pub angular_diameter: f64,
    /// Visual magnitude at 1 AU
    pub magnitude: f64,
}

/// Evaluate `c[0] + c[1] t + c[2] t^2 + ...`
pub(crate) fn polynomial(coeffs: &[f64], t: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

#[rustfmt::skip]
const MERCURY: ElementTable = ElementTable {
    mean_longitude:          [178.179078, 149474.07078, 0.0003011, 0.0],
    longitude_of_perihelion: [75.899697, 1.5554889, 2.947e-4, 0.0],
    argument_of_perihelion:  Some([28.753753, 0.3702806, 0.0001208, 0.0]),
    eccentricity:            [0.20561421, 0.00002046, -0.000000030, 0.0],
    inclination:             [7.002881, 0.0018608, -0.0000183, 0.0],
    ascending_node:          [47.145944, 1.1852083, 0.0001739, 0.0],
    mean_anomaly:            Some([102.27938, 149472.51529, 0.000007]),
    semi_major_axis: 0.3870986,
    angular_diameter: 6.74,
    magnitude: -0.42,
};

#[rustfmt::skip]
const VENUS: ElementTable = ElementTable {
    mean_longitude:          [342.767053, 58519.21191, 0.0003097, 0.0],
    longitude_of_perihelion: [130.163833, 1.4080361, -9.764e-4, 0.0],
    argument_of_perihelion:  Some([54.384186, 0.5081861, -0.0013864, 0.0]),
    eccentricity:            [0.00682069, -0.00004774, 0.000000091, 0.0],
    inclination:             [3.393631, 0.001058, -0.0000010, 0.0],
    ascending_node:          [75.779647, 0.8998500, 0.0004100, 0.0],
    // 58517.80387: the printed 5817.80387 drops a digit
    mean_anomaly:            Some([212.60322, 58517.80387, 0.001286]),
    semi_major_axis: 0.7233316,
    angular_diameter: 16.92,
    magnitude: -4.4,
};

#[rustfmt::skip]
const MARS: ElementTable = ElementTable {
    mean_longitude:          [293.737334, 19141.69551, 0.0003107, 0.0],
    longitude_of_perihelion: [334.218203, 1.8407584, 1.299e-4, -1.19e-6],
    argument_of_perihelion:  Some([285.431761, 1.0697667, 0.0001313, 0.00000414]),
    eccentricity:            [0.09331290, 0.000092064, -0.000000077, 0.0],
    inclination:             [1.850333, -0.0006750, 0.0000126, 0.0],
    ascending_node:          [48.786442, 0.7709917, -0.0000014, -0.00000533],
    mean_anomaly:            Some([319.51913, 19139.85475, 0.000181]),
    semi_major_axis: 1.5236883,
    angular_diameter: 9.36,
    magnitude: -1.52,
};

#[rustfmt::skip]
const JUPITER: ElementTable = ElementTable {
    mean_longitude:          [238.049257, 3036.301986, 0.0003347, -0.00000165],
    longitude_of_perihelion: [12.720972, 1.6099617, 1.05627e-3, -3.43e-6],
    argument_of_perihelion:  Some([273.277558, 0.5994317, 0.00070405, 0.00000508]),
    eccentricity:            [0.04833475, 0.000164180, -0.0000004676, -0.0000000017],
    inclination:             [1.308736, -0.0056961, 0.0000039, 0.0],
    ascending_node:          [99.443414, 1.0105300, 0.00035222, -0.00000851],
    mean_anomaly:            Some([225.32833, 3034.69202, 0.000722]),
    semi_major_axis: 5.202561,
    angular_diameter: 196.74,
    magnitude: -9.4,
};

#[rustfmt::skip]
const SATURN: ElementTable = ElementTable {
    mean_longitude:          [266.564337, 1223.509884, 0.0003245, -0.0000058],
    longitude_of_perihelion: [91.098214, 1.9584158, 8.2636e-4, 4.61e-6],
    argument_of_perihelion:  Some([338.307800, 1.0852207, 0.00097854, 0.00000992]),
    eccentricity:            [0.05589232, -0.00034550, -0.000000728, 0.00000000074],
    inclination:             [2.492519, -0.0039189, -0.00001549, 0.00000004],
    ascending_node:          [112.790414, 0.8731951, -0.00015218, -0.00000531],
    mean_anomaly:            Some([175.46622, 1221.55147, 0.000502]),
    semi_major_axis: 9.554747,
    angular_diameter: 165.6,
    magnitude: -8.88,
};

#[rustfmt::skip]
const URANUS: ElementTable = ElementTable {
    mean_longitude:          [244.197470, 429.863546, 0.0003160, -0.00000060],
    longitude_of_perihelion: [171.548692, 1.4844328, 2.372e-4, -6.1e-7],
    argument_of_perihelion:  Some([98.071581, 0.9857650, -0.0010745, -0.00000061]),
    eccentricity:            [0.0463444, -0.00002658, 0.000000077, 0.0],
    inclination:             [0.772464, 0.0006253, 0.0000395, 0.0],
    ascending_node:          [73.477111, 0.4986678, 0.0013117, 0.0],
    mean_anomaly:            Some([72.64878, 428.37911, 0.000079]),
    semi_major_axis: 19.21814,
    angular_diameter: 65.8,
    magnitude: -7.19,
};

#[rustfmt::skip]
const NEPTUNE: ElementTable = ElementTable {
    mean_longitude:          [84.457994, 219.885914, 0.0003205, -0.00000060],
    longitude_of_perihelion: [46.727364, 1.4245744, 3.9082e-4, -6.05e-7],
    argument_of_perihelion:  Some([276.045975, 0.3256394, 0.00014095, 0.000004113]),
    eccentricity:            [0.00899704, 0.000006330, 0.000000002, 0.0],
    inclination:             [1.779242, -9.5436e-3, -9.1e-6, 0.0],
    ascending_node:          [130.681389, 1.098935, 2.4987e-4, -4.718e-6],
    mean_anomaly:            Some([37.73063, 218.46134, 0.000070]),
    semi_major_axis: 30.10957,
    angular_diameter: 62.2,
    magnitude: -6.87,
};

// Mean motion is tabulated as 0.003980332167 degrees per day
#[rustfmt::skip]
const PLUTO: ElementTable = ElementTable {
    mean_longitude:          [95.3113544, 0.003980332167 * 36525.0, 0.0, 0.0],
    longitude_of_perihelion: [224.017, 0.0, 0.0, 0.0],
    argument_of_perihelion:  None,
    eccentricity:            [0.25515, 0.0, 0.0, 0.0],
    inclination:             [17.1329, 0.0, 0.0, 0.0],
    ascending_node:          [110.191, 0.0, 0.0, 0.0],
    mean_anomaly:            None,
    semi_major_axis: 39.8151,
    angular_diameter: 8.2,
    magnitude: 1.0,
};

/// Element table of a planet; `None` for the Sun, Moon and Earth
pub(crate) fn element_table(body: Body) -> Option<&'static ElementTable> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        Body::Uranus => Some(&URANUS),
        Body::Neptune => Some(&NEPTUNE),
        Body::Pluto => Some(&PLUTO),
        Body::Sun | Body::Moon | Body::Earth => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial() {
        assert_eq!(polynomial(&[1.0, 2.0, 3.0], 0.0), 1.0);
        assert_relative_eq!(polynomial(&[1.0, 2.0, 3.0, 4.0], 2.0), 49.0);
        assert_eq!(polynomial(&[], 5.0), 0.0);
    }

    #[test]
    fn test_tables_cover_planets() {
        for body in Body::ALL {
            let expected = !matches!(body, Body::Sun | Body::Moon | Body::Earth);
            assert_eq!(element_table(body).is_some(), expected, "{}", body.name());
        }
    }

    #[test]
    fn test_pluto_mean_motion() {
        // about 248 years per revolution
        let rate = PLUTO.mean_longitude[1];
        assert_relative_eq!(360.0 * 36525.0 / rate / 365.25, 247.6, epsilon = 0.1);
    }
}
