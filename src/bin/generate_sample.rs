use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

struct Student {
    student_id: i64,
    gender: &'static str,
    parental_education: &'static str,
    lunch: &'static str,
    test_preparation: &'static str,
    math_score: i64,
    reading_score: i64,
    writing_score: i64,
    attendance_rate: f64,
}

fn clamp_score(v: f64) -> i64 {
    v.round().clamp(0.0, 100.0) as i64
}

fn generate_students(n: usize, rng: &mut SimpleRng) -> Vec<Student> {
    let genders = ["F", "M"];
    let educations = [
        "high_school",
        "some_college",
        "associate_degree",
        "bachelor_degree",
        "master_degree",
    ];
    let lunches = ["standard", "free_reduced"];
    let preparations = ["completed", "none"];

    (0..n)
        .map(|i| {
            let gender = *rng.choose(&genders);
            let parental_education = *rng.choose(&educations);
            let lunch = *rng.choose(&lunches);
            let test_preparation = *rng.choose(&preparations);

            // Per-student aptitude plus small effects for preparation and lunch,
            // so grouped summaries and correlations have visible structure.
            let mut base = rng.gauss(66.0, 11.0);
            if test_preparation == "completed" {
                base += 6.0;
            }
            if lunch == "standard" {
                base += 3.0;
            }

            let attendance_rate = (0.85 + (base - 66.0) * 0.003 + rng.gauss(0.0, 0.05))
                .clamp(0.4, 1.0);

            Student {
                student_id: i as i64 + 1,
                gender,
                parental_education,
                lunch,
                test_preparation,
                math_score: clamp_score(base + rng.gauss(0.0, 6.0)),
                reading_score: clamp_score(base + rng.gauss(0.0, 5.0)),
                writing_score: clamp_score(base + rng.gauss(0.0, 5.0)),
                attendance_rate: (attendance_rate * 1000.0).round() / 1000.0,
            }
        })
        .collect()
}

fn write_csv(students: &[Student], path: &str) {
    let mut writer = csv::Writer::from_path(path).expect("Failed to create CSV file");
    writer
        .write_record([
            "student_id",
            "gender",
            "parental_education",
            "lunch",
            "test_preparation",
            "math_score",
            "reading_score",
            "writing_score",
            "attendance_rate",
        ])
        .expect("Failed to write CSV header");

    for s in students {
        writer
            .write_record([
                s.student_id.to_string(),
                s.gender.to_string(),
                s.parental_education.to_string(),
                s.lunch.to_string(),
                s.test_preparation.to_string(),
                s.math_score.to_string(),
                s.reading_score.to_string(),
                s.writing_score.to_string(),
                s.attendance_rate.to_string(),
            ])
            .expect("Failed to write CSV record");
    }
    writer.flush().expect("Failed to flush CSV file");
}

fn write_parquet(students: &[Student], path: &str) {
    let schema = Arc::new(Schema::new(vec![
        Field::new("student_id", DataType::Int64, false),
        Field::new("gender", DataType::Utf8, false),
        Field::new("parental_education", DataType::Utf8, false),
        Field::new("lunch", DataType::Utf8, false),
        Field::new("test_preparation", DataType::Utf8, false),
        Field::new("math_score", DataType::Int64, false),
        Field::new("reading_score", DataType::Int64, false),
        Field::new("writing_score", DataType::Int64, false),
        Field::new("attendance_rate", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(
                students.iter().map(|s| s.student_id),
            )),
            Arc::new(StringArray::from_iter_values(
                students.iter().map(|s| s.gender),
            )),
            Arc::new(StringArray::from_iter_values(
                students.iter().map(|s| s.parental_education),
            )),
            Arc::new(StringArray::from_iter_values(
                students.iter().map(|s| s.lunch),
            )),
            Arc::new(StringArray::from_iter_values(
                students.iter().map(|s| s.test_preparation),
            )),
            Arc::new(Int64Array::from_iter_values(
                students.iter().map(|s| s.math_score),
            )),
            Arc::new(Int64Array::from_iter_values(
                students.iter().map(|s| s.reading_score),
            )),
            Arc::new(Int64Array::from_iter_values(
                students.iter().map(|s| s.writing_score),
            )),
            Arc::new(Float64Array::from_iter_values(
                students.iter().map(|s| s.attendance_rate),
            )),
        ],
    )
    .expect("Failed to create RecordBatch");

    let file = std::fs::File::create(path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");
}

fn main() {
    let mut rng = SimpleRng::new(42);
    let students = generate_students(200, &mut rng);

    std::fs::create_dir_all("data").expect("Failed to create data directory");
    write_csv(&students, "data/stud.csv");
    write_parquet(&students, "data/stud.parquet");

    println!(
        "Wrote {} students to data/stud.csv and data/stud.parquet",
        students.len()
    );
}
