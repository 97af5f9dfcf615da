use crate::error::{InsightError, Result};
use chrono::{Datelike, Duration, NaiveDate};

/// Minimum observed span before the weekly component is estimated. Anything
/// shorter degrades to the pure trend so the model cannot memorize residuals
/// from a fraction of a cycle.
const WEEKLY_SEASONALITY_MIN_SPAN_DAYS: i64 = 14;

/// Strategy interface for the forecasting step.
///
/// Implementations take raw `(date, amount)` observations (same-day duplicates
/// are meaningful and must not be aggregated) and return one predicted value
/// for every distinct observation date followed by `horizon_days` consecutive
/// calendar days after the last observed date.
pub trait ForecastModel: Send + Sync {
    fn fit_and_predict(
        &self,
        observations: &[(NaiveDate, f64)],
        horizon_days: u32,
    ) -> Result<Vec<(NaiveDate, f64)>>;
}

/// Additive trend + weekly seasonality model.
///
/// The trend is an ordinary least-squares line over day offsets from the first
/// observed date. The weekly component is the mean trend residual per weekday,
/// so it is centered by construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeasonalTrendModel;

// Parameters of one fitted curve.
struct FittedCurve {
    origin: NaiveDate,
    slope: f64,
    intercept: f64,
    weekday_adjust: [f64; 7],
}

impl FittedCurve {
    fn value_on(&self, date: NaiveDate) -> f64 {
        let x = (date - self.origin).num_days() as f64;
        let weekday = date.weekday().num_days_from_monday() as usize;
        self.intercept + self.slope * x + self.weekday_adjust[weekday]
    }
}

impl ForecastModel for SeasonalTrendModel {
    fn fit_and_predict(
        &self,
        observations: &[(NaiveDate, f64)],
        horizon_days: u32,
    ) -> Result<Vec<(NaiveDate, f64)>> {
        let mut dates: Vec<NaiveDate> = observations.iter().map(|(date, _)| *date).collect();
        dates.sort();
        dates.dedup();

        if dates.len() < 2 {
            return Err(InsightError::ForecastUnavailable {
                details: format!(
                    "need at least 2 distinct observation dates to fit a trend, got {}",
                    dates.len()
                ),
            });
        }

        let origin = dates[0];
        let last = dates[dates.len() - 1];
        let curve = fit_curve(observations, origin, last)?;

        let mut points = Vec::with_capacity(dates.len() + horizon_days as usize);
        for &date in &dates {
            points.push((date, curve.value_on(date)));
        }
        for offset in 1..=i64::from(horizon_days) {
            let date = last + Duration::days(offset);
            points.push((date, curve.value_on(date)));
        }

        Ok(points)
    }
}

fn fit_curve(
    observations: &[(NaiveDate, f64)],
    origin: NaiveDate,
    last: NaiveDate,
) -> Result<FittedCurve> {
    let n = observations.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;

    for (date, value) in observations {
        let x = (*date - origin).num_days() as f64;
        sum_x += x;
        sum_y += value;
        sum_xx += x * x;
        sum_xy += x * value;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == 0.0 {
        return Err(InsightError::ForecastUnavailable {
            details: "observation dates carry no spread; the trend slope is undetermined"
                .to_string(),
        });
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;

    let mut weekday_adjust = [0.0f64; 7];
    let span_days = (last - origin).num_days();
    if span_days >= WEEKLY_SEASONALITY_MIN_SPAN_DAYS {
        let mut sums = [0.0f64; 7];
        let mut counts = [0usize; 7];

        for (date, value) in observations {
            let x = (*date - origin).num_days() as f64;
            let residual = value - (intercept + slope * x);
            let weekday = date.weekday().num_days_from_monday() as usize;
            sums[weekday] += residual;
            counts[weekday] += 1;
        }

        for weekday in 0..7 {
            if counts[weekday] > 0 {
                weekday_adjust[weekday] = sums[weekday] / counts[weekday] as f64;
            }
        }
    }

    Ok(FittedCurve {
        origin,
        slope,
        intercept,
        weekday_adjust,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_recovers_exact_linear_series() {
        let observations: Vec<(NaiveDate, f64)> = (0..10u32)
            .map(|i| (day(2024, 1, 1 + i), 10.0 * (f64::from(i) + 1.0)))
            .collect();

        let curve = SeasonalTrendModel
            .fit_and_predict(&observations, 30)
            .unwrap();

        assert_eq!(curve.len(), 40);
        assert_eq!(curve[0].0, day(2024, 1, 1));
        assert!((curve[0].1 - 10.0).abs() < 1e-9);

        let (last_date, last_value) = curve[curve.len() - 1];
        assert_eq!(last_date, day(2024, 2, 9));
        assert!(
            (last_value - 400.0).abs() < 1e-9,
            "Day 39 on a slope of 10/day should be 400, got {}",
            last_value
        );
    }

    #[test]
    fn test_requires_two_distinct_dates() {
        let observations = vec![
            (day(2024, 1, 1), 100.0),
            (day(2024, 1, 1), -50.0),
            (day(2024, 1, 1), 25.0),
        ];

        let result = SeasonalTrendModel.fit_and_predict(&observations, 30);
        assert!(matches!(
            result,
            Err(InsightError::ForecastUnavailable { .. })
        ));
    }

    #[test]
    fn test_empty_observations_cannot_fit() {
        let result = SeasonalTrendModel.fit_and_predict(&[], 30);
        assert!(matches!(
            result,
            Err(InsightError::ForecastUnavailable { .. })
        ));
    }

    #[test]
    fn test_same_day_duplicates_all_contribute() {
        let observations = vec![
            (day(2024, 1, 1), 10.0),
            (day(2024, 1, 1), 20.0),
            (day(2024, 1, 2), 30.0),
        ];

        let curve = SeasonalTrendModel.fit_and_predict(&observations, 5).unwrap();

        // One refit point per distinct date plus the horizon.
        assert_eq!(curve.len(), 7);
        assert!(
            (curve[0].1 - 15.0).abs() < 1e-9,
            "Duplicates on day 0 should pull the fit to their mean, got {}",
            curve[0].1
        );
        assert!((curve[1].1 - 30.0).abs() < 1e-9);
        assert!((curve[6].1 - 105.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_axis_covers_history_then_horizon() {
        let observations = vec![
            (day(2024, 1, 9), 30.0),
            (day(2024, 1, 1), 10.0),
            (day(2024, 1, 5), 20.0),
        ];

        let curve = SeasonalTrendModel
            .fit_and_predict(&observations, 30)
            .unwrap();

        assert_eq!(curve.len(), 33);
        assert_eq!(curve[0].0, day(2024, 1, 1));
        assert_eq!(curve[1].0, day(2024, 1, 5));
        assert_eq!(curve[2].0, day(2024, 1, 9));
        assert_eq!(curve[3].0, day(2024, 1, 10));
        assert_eq!(curve[32].0, day(2024, 2, 8));
    }

    #[test]
    fn test_weekly_pattern_shapes_long_histories() {
        // Eight full weeks starting Monday 2024-01-01, flat at 100 with a
        // Saturday bump to 150.
        let observations: Vec<(NaiveDate, f64)> = (0..56)
            .map(|i| {
                let date = day(2024, 1, 1) + Duration::days(i);
                let value = if date.weekday() == chrono::Weekday::Sat {
                    150.0
                } else {
                    100.0
                };
                (date, value)
            })
            .collect();

        let curve = SeasonalTrendModel
            .fit_and_predict(&observations, 14)
            .unwrap();

        let friday = day(2024, 3, 1);
        let saturday = day(2024, 3, 2);
        let value_for = |wanted: NaiveDate| -> f64 {
            curve
                .iter()
                .find(|(date, _)| *date == wanted)
                .map(|(_, value)| *value)
                .unwrap()
        };

        let lift = value_for(saturday) - value_for(friday);
        assert!(
            lift > 25.0,
            "Saturday should keep its bump in the horizon, got a lift of {}",
            lift
        );
    }

    #[test]
    fn test_short_histories_stay_linear() {
        // Ten days with a Saturday outlier; the span is too short for the
        // weekly component, so the projection must be a straight line.
        let observations: Vec<(NaiveDate, f64)> = (0..10)
            .map(|i| {
                let date = day(2024, 1, 1) + Duration::days(i);
                let value = if date.weekday() == chrono::Weekday::Sat {
                    150.0
                } else {
                    100.0
                };
                (date, value)
            })
            .collect();

        let curve = SeasonalTrendModel
            .fit_and_predict(&observations, 14)
            .unwrap();

        let horizon = &curve[10..];
        let first_step = horizon[1].1 - horizon[0].1;
        for window in horizon.windows(2) {
            let step = window[1].1 - window[0].1;
            assert!(
                (step - first_step).abs() < 1e-6,
                "Expected a constant daily step, got {} then {}",
                first_step,
                step
            );
        }
    }
}
