//! Season-weighted statistic averaging

use crate::engine::config::ProfileConfig;
use crate::models::SeasonRow;

/// 연도별 가중 평균
///
/// 가중치 스케줄에 없는 시즌, 값이 비어 있거나 유한하지 않은 행은 건너뛰고
/// 그 가중치도 분모에서 제외한다. 유효한 관측이 하나도 없으면 `None`.
pub fn weighted_stat<'a, R, F>(
    rows: impl IntoIterator<Item = &'a R>,
    config: &ProfileConfig,
    value: F,
) -> Option<f64>
where
    R: SeasonRow + 'a,
    F: Fn(&R) -> Option<f64>,
{
    let (total, weight_sum) = rows
        .into_iter()
        .filter_map(|row| {
            let weight = config.weight_for(row.season())?;
            let v = value(row).filter(|v| v.is_finite())?;
            Some((weight, v))
        })
        .fold((0.0, 0.0), |(total, weight_sum), (weight, v)| {
            (total + weight * v, weight_sum + weight)
        });

    if weight_sum > 0.0 {
        Some(total / weight_sum)
    } else {
        None
    }
}

/// 가중치 없는 단순 평균 (유효 값만)
pub fn plain_mean<'a, R, F>(rows: impl IntoIterator<Item = &'a R>, value: F) -> Option<f64>
where
    R: 'a,
    F: Fn(&R) -> Option<f64>,
{
    let (sum, count) = rows
        .into_iter()
        .filter_map(|row| value(row).filter(|v| v.is_finite()))
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
