// src/output.rs
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Write one series as `time,value` rows, one per step
pub fn write_series(filename: &str, times: &[f64], values: &[f64]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for (t, v) in times.iter().zip(values) {
        writeln!(file, "{},{}", t, v)?;
    }
    Ok(())
}

/// Write both schemes side by side, tab-separated with a header row
pub fn write_joint_series(
    filename: &str,
    times: &[f64],
    linear: &[f64],
    logarithmic: &[f64],
) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    writeln!(file, "t\tlinear_prices\tlogarithmic_prices")?;
    for ((t, lin), log) in times.iter().zip(linear).zip(logarithmic) {
        writeln!(file, "{}\t{}\t{}", t, lin, log)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_series_rows() {
        let path = std::env::temp_dir().join("gbm_paths_series_test.csv");
        let path = path.to_str().unwrap().to_string();
        write_series(&path, &[0.0, 0.5, 1.0], &[1.0, 1.1, 1.2]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "0,1");
        assert_eq!(rows[2], "1,1.2");
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_joint_series_header() {
        let path = std::env::temp_dir().join("gbm_paths_joint_test.tsv");
        let path = path.to_str().unwrap().to_string();
        write_joint_series(&path, &[0.0, 1.0], &[1.0, 1.1], &[0.0, 0.05]).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows[0], "t\tlinear_prices\tlogarithmic_prices");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], "0\t1\t0");
        fs::remove_file(&path).ok();
    }
}
