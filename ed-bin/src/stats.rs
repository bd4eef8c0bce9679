use std::fmt::Display;

use derive_more::AddAssign;
use ed_types::{Cost, Seq};

/// Stats of one evaluation, or the sum over many.
#[derive(Default, Clone, Copy, AddAssign, Debug)]
pub struct Stats {
    pub len_a: usize,
    pub len_b: usize,
    /// The computed distance.
    pub distance: Cost,
    /// Seconds spent computing the distance.
    pub duration: f64,
    pub sample_size: usize,
}

impl Stats {
    pub fn new(a: Seq, b: Seq, distance: Cost, duration: f64) -> Self {
        Self {
            len_a: a.len(),
            len_b: b.len(),
            distance,
            duration,
            sample_size: 1,
        }
    }

    fn format_raw<T: Display>(&self, width: usize, title: &str, val: T) -> (String, String) {
        (format!("{:>width$}", title), format!("{:>width$}", val))
    }

    fn format_flt<T: Display>(&self, mut width: usize, title: &str, val: T) -> (String, String) {
        let val = val.to_string();
        // make sure to not discard things before the decimal point.
        let point = val.find('.').unwrap_or(val.len());
        width = width.max(point);
        let mut val = val.as_str();
        if val.len() > width {
            val = &val[0..width];
        }
        (format!("{:>width$}", title), format!("{:>width$}", val))
    }

    fn format_avg<T: num_traits::AsPrimitive<f32>>(
        &self,
        width: usize,
        title: &str,
        val: T,
    ) -> (String, String) {
        self.format_flt(width, title, val.as_() / self.sample_size.max(1) as f32)
    }

    /// Column titles and (averaged) values.
    pub fn values(&self) -> (Vec<String>, Vec<String>) {
        let longest = self.len_a.max(self.len_b).max(1);
        [
            self.format_raw(7, "nr", self.sample_size),
            self.format_avg(8, "|a|", self.len_a),
            self.format_avg(8, "|b|", self.len_b),
            self.format_avg(7, "ed", self.distance),
            self.format_flt(5, "e%", 100.0 * self.distance as f32 / longest as f32),
            self.format_avg(10, "t(ms)", 1000. * self.duration),
        ]
        .into_iter()
        .unzip()
    }

    /// Print the values, prefixed by `name`. With `header`, print the titles first.
    pub fn print(&self, name: &str, header: bool) {
        let (titles, values) = self.values();
        if header {
            println!("{:<32} {}", "evaluator", titles.join(" "));
        }
        println!("{name:<32} {}", values.join(" "));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn averages() {
        let mut total = Stats::default();
        total += Stats::new(b"abcd", b"ab", 2, 0.002);
        total += Stats::new(b"ab", b"abcd", 4, 0.004);
        assert_eq!(total.sample_size, 2);
        let (titles, values) = total.values();
        assert_eq!(titles.len(), values.len());
        let get = |t: &str| {
            let idx = titles.iter().position(|x| x.trim() == t).unwrap();
            values[idx].trim().to_string()
        };
        assert_eq!(get("nr"), "2");
        assert_eq!(get("|a|"), "3");
        assert_eq!(get("ed"), "3");
        assert_eq!(get("e%"), "100");
    }

    #[test]
    fn empty_stats_do_not_divide_by_zero() {
        let (_, values) = Stats::default().values();
        assert!(values.iter().all(|v| !v.contains("NaN")));
    }
}
