//! Conversion of numeric sequences into plot coordinates.

/// Types that can be turned into a series of `f64` coordinates.
pub trait IntoPlotData {
    fn into_plot_data(self) -> Vec<f64>;
}

macro_rules! impl_into_plot_data {
    ($($t:ty),*) => {
        $(
            impl IntoPlotData for Vec<$t> {
                fn into_plot_data(self) -> Vec<f64> {
                    self.into_iter().map(|v| v as f64).collect()
                }
            }

            impl IntoPlotData for &Vec<$t> {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|v| *v as f64).collect()
                }
            }

            impl IntoPlotData for &[$t] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|v| *v as f64).collect()
                }
            }

            impl<const N: usize> IntoPlotData for [$t; N] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|v| *v as f64).collect()
                }
            }

            impl<const N: usize> IntoPlotData for &[$t; N] {
                fn into_plot_data(self) -> Vec<f64> {
                    self.iter().map(|v| *v as f64).collect()
                }
            }
        )*
    };
}

impl_into_plot_data!(f64, f32, i32, i64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(vec![1_i32, 2, 3].into_plot_data(), vec![1.0, 2.0, 3.0]);
        assert_eq!([0.5_f32, 1.5].into_plot_data(), vec![0.5, 1.5]);
        let owned = vec![4_usize, 5];
        assert_eq!((&owned).into_plot_data(), vec![4.0, 5.0]);
        assert_eq!(owned[..1].into_plot_data(), vec![4.0]);
    }
}
