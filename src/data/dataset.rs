use crate::error::{TreeError, TreeResult};
use csv::{ReaderBuilder, Trim};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A single labeled observation: one categorical value per attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
    label: bool,
}

impl Record {
    pub fn new<S: Into<String>>(values: Vec<S>, label: bool) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            label,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn label(&self) -> bool {
        self.label
    }
}

/// Categorical dataset with a boolean label.
///
/// Every record holds exactly one value per attribute, in the order of
/// [`Dataset::attributes`].
#[derive(Clone, PartialEq, Eq)]
pub struct Dataset {
    attributes: Vec<String>,
    records: Vec<Record>,
}

impl Debug for Dataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dataset {{")?;
        writeln!(f, "    attributes: {:?},", self.attributes)?;
        writeln!(f, "    records: [")?;
        for record in &self.records {
            writeln!(f, "        {:?} -> {},", record.values, record.label)?;
        }
        write!(f, "    ]\n}}")
    }
}

impl Dataset {
    /// Creates a dataset, checking that attribute names are distinct and that
    /// every record has one value per attribute.
    pub fn new<S: Into<String>>(attributes: Vec<S>, records: Vec<Record>) -> TreeResult<Self> {
        let attributes: Vec<String> = attributes.into_iter().map(Into::into).collect();

        if let Some(duplicate) = find_duplicate(&attributes) {
            return Err(TreeError::invalid(format!(
                "Attribute '{}' appears more than once",
                duplicate
            )));
        }

        if let Some((row, record)) = records
            .iter()
            .enumerate()
            .find(|(_, record)| record.values.len() != attributes.len())
        {
            return Err(TreeError::invalid(format!(
                "Record {} has {} values, expected {}",
                row,
                record.values.len(),
                attributes.len()
            )));
        }

        Ok(Self {
            attributes,
            records,
        })
    }

    /// Reads a dataset from CSV with a header row.
    ///
    /// The `label` column holds the boolean outcome. When `id_column` is given
    /// that column is dropped; every other column becomes an attribute, in
    /// header order.
    pub fn from_csv<R: Read>(rdr: R, label: &str, id_column: Option<&str>) -> TreeResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(rdr);
        let headers = reader.headers()?.clone();

        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header == name)
                .ok_or_else(|| TreeError::invalid(format!("Missing column '{}'", name)))
        };
        let label_index = column(label)?;
        let id_index = id_column.map(column).transpose()?;

        let attribute_columns: Vec<usize> = (0..headers.len())
            .filter(|&index| index != label_index && Some(index) != id_index)
            .collect();
        let attributes: Vec<String> = attribute_columns
            .iter()
            .map(|&index| headers[index].to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            let label_cell = row
                .get(label_index)
                .ok_or_else(|| TreeError::invalid("Missing label"))?;
            let values = attribute_columns
                .iter()
                .map(|&index| {
                    row.get(index)
                        .map(str::to_string)
                        .ok_or_else(|| TreeError::invalid(format!("Missing value in column {}", index)))
                })
                .collect::<TreeResult<Vec<_>>>()?;

            records.push(Record::new(values, parse_label(label_cell)?));
        }

        Self::new(attributes, records)
    }

    /// Reads a dataset from a CSV file, see [`Dataset::from_csv`].
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        label: &str,
        id_column: Option<&str>,
    ) -> TreeResult<Self> {
        let file = File::open(path).map_err(csv::Error::from)?;
        Self::from_csv(file, label, id_column)
    }

    /// The classic 14-day "PlayTennis" dataset.
    pub fn play_tennis() -> Self {
        let rows = [
            ["Sunny", "Hot", "High", "Weak", "false"],
            ["Sunny", "Hot", "High", "Strong", "false"],
            ["Overcast", "Hot", "High", "Weak", "true"],
            ["Rain", "Mild", "High", "Weak", "true"],
            ["Rain", "Cool", "Normal", "Weak", "true"],
            ["Rain", "Cool", "Normal", "Strong", "false"],
            ["Overcast", "Cool", "Normal", "Strong", "true"],
            ["Sunny", "Mild", "High", "Weak", "false"],
            ["Sunny", "Cool", "Normal", "Weak", "true"],
            ["Rain", "Mild", "Normal", "Weak", "true"],
            ["Sunny", "Mild", "Normal", "Strong", "true"],
            ["Overcast", "Mild", "High", "Strong", "true"],
            ["Overcast", "Hot", "Normal", "Weak", "true"],
            ["Rain", "Mild", "High", "Strong", "false"],
        ];

        Self {
            attributes: ["Outlook", "Temperature", "Humidity", "Wind"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
            records: rows
                .iter()
                .map(|row| Record::new(row[..4].to_vec(), row[4] == "true"))
                .collect(),
        }
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.records.iter().map(Record::label).collect()
    }

    pub fn attribute_index(&self, attribute: &str) -> Option<usize> {
        self.attributes.iter().position(|name| name == attribute)
    }

    /// Value of `attribute` in record `row`.
    pub fn value(&self, row: usize, attribute: &str) -> TreeResult<&str> {
        let index = self
            .attribute_index(attribute)
            .ok_or_else(|| TreeError::invalid(format!("Unknown attribute '{}'", attribute)))?;
        let record = self
            .records
            .get(row)
            .ok_or_else(|| TreeError::invalid(format!("Record {} is out of range", row)))?;
        Ok(&record.values[index])
    }

    /// A view over every record of the dataset.
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView {
            dataset: self,
            rows: (0..self.records.len()).collect(),
        }
    }

    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> TreeResult<(Self, Self)> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err(TreeError::invalid("Train size should be between 0.0 and 1.0"));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.records.len()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.records.len() as f64 * train_size).floor() as usize;
        let (train_indices, test_indices) = indices.split_at(train_size);

        Ok((self.select(train_indices), self.select(test_indices)))
    }

    fn select(&self, rows: &[usize]) -> Self {
        Self {
            attributes: self.attributes.clone(),
            records: rows.iter().map(|&row| self.records[row].clone()).collect(),
        }
    }
}

pub(crate) fn find_duplicate(names: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(String::as_str)
        .find(|name| !seen.insert(*name))
}

fn parse_label(cell: &str) -> TreeResult<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(TreeError::invalid(format!("Label '{}' is not boolean", other))),
    }
}

/// Rows of a [`Dataset`] selected by index.
///
/// Partitioning a view yields new index lists; records are never copied.
#[derive(Clone, Debug)]
pub struct DatasetView<'a> {
    dataset: &'a Dataset,
    rows: Vec<usize>,
}

impl<'a> DatasetView<'a> {
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn labels(&self) -> Vec<bool> {
        self.rows
            .iter()
            .map(|&row| self.dataset.records[row].label)
            .collect()
    }

    /// Groups the rows by their value of `attribute`.
    ///
    /// Groups come out in the order their value is first seen, so repeated
    /// calls always agree.
    pub fn partition(&self, attribute: &str) -> TreeResult<Vec<(&'a str, DatasetView<'a>)>> {
        let dataset = self.dataset;
        let index = dataset
            .attribute_index(attribute)
            .ok_or_else(|| TreeError::invalid(format!("Unknown attribute '{}'", attribute)))?;

        let mut groups: Vec<(&'a str, DatasetView<'a>)> = Vec::new();
        for &row in &self.rows {
            let value = dataset.records[row].values[index].as_str();
            match groups.iter_mut().find(|(seen, _)| *seen == value) {
                Some((_, group)) => group.rows.push(row),
                None => groups.push((
                    value,
                    DatasetView {
                        dataset,
                        rows: vec![row],
                    },
                )),
            }
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER_CSV: &str = "\
Day,Outlook,Wind,Play
D1,Sunny,Weak,no
D2,Sunny,Strong,No
D3,Overcast,Weak,YES
D4,Rain,Weak,true
";

    #[test]
    fn test_dataset_new() {
        let dataset = Dataset::new(
            vec!["Outlook", "Wind"],
            vec![
                Record::new(vec!["Sunny", "Weak"], false),
                Record::new(vec!["Rain", "Strong"], true),
            ],
        )
        .unwrap();

        assert_eq!(dataset.attributes(), ["Outlook", "Wind"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.labels(), vec![false, true]);
        assert_eq!(dataset.value(1, "Wind").unwrap(), "Strong");
    }

    #[test]
    fn test_dataset_new_duplicate_attribute() {
        let result = Dataset::new(vec!["Outlook", "Outlook"], vec![]);
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_dataset_new_ragged_record() {
        let result = Dataset::new(
            vec!["Outlook", "Wind"],
            vec![Record::new(vec!["Sunny"], false)],
        );
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_dataset_value_unknown_attribute() {
        let dataset = Dataset::play_tennis();
        assert!(dataset.value(0, "PlayTennis").is_err());
        assert!(dataset.value(14, "Outlook").is_err());
    }

    #[test]
    fn test_dataset_formatting() {
        let dataset = Dataset::new(
            vec!["Outlook"],
            vec![Record::new(vec!["Sunny"], false)],
        )
        .unwrap();

        let expected_str = "\
Dataset {
    attributes: [\"Outlook\"],
    records: [
        [\"Sunny\"] -> false,
    ]
}";

        assert_eq!(format!("{:?}", dataset), expected_str);
    }

    #[test]
    fn test_from_csv() {
        let dataset = Dataset::from_csv(WEATHER_CSV.as_bytes(), "Play", Some("Day")).unwrap();

        assert_eq!(dataset.attributes(), ["Outlook", "Wind"]);
        assert_eq!(dataset.labels(), vec![false, false, true, true]);
        assert_eq!(dataset.value(2, "Outlook").unwrap(), "Overcast");
    }

    #[test]
    fn test_from_csv_keeps_id_column_when_not_named() {
        let dataset = Dataset::from_csv(WEATHER_CSV.as_bytes(), "Play", None).unwrap();
        assert_eq!(dataset.attributes(), ["Day", "Outlook", "Wind"]);
    }

    #[test]
    fn test_from_csv_missing_label_column() {
        let result = Dataset::from_csv(WEATHER_CSV.as_bytes(), "PlayTennis", Some("Day"));
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_from_csv_bad_label() {
        let csv = "Outlook,Play\nSunny,maybe\n";
        let result = Dataset::from_csv(csv.as_bytes(), "Play", None);
        assert!(matches!(result, Err(TreeError::InvalidInput(_))));
    }

    #[test]
    fn test_from_csv_ragged_row() {
        let csv = "Outlook,Wind,Play\nSunny,Weak,no\nRain,yes\n";
        let result = Dataset::from_csv(csv.as_bytes(), "Play", None);
        assert!(matches!(result, Err(TreeError::Csv(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Dataset::from_path("does/not/exist.csv", "Play", None);
        assert!(matches!(result, Err(TreeError::Csv(_))));
    }

    #[test]
    fn test_play_tennis() {
        let dataset = Dataset::play_tennis();
        assert_eq!(dataset.len(), 14);
        assert_eq!(dataset.labels().iter().filter(|&&label| label).count(), 9);
    }

    #[test]
    fn test_view_partition_keeps_first_seen_order() {
        let dataset = Dataset::play_tennis();
        let view = dataset.view();
        let partitions = view.partition("Outlook").unwrap();

        let values: Vec<_> = partitions.iter().map(|(value, _)| *value).collect();
        assert_eq!(values, vec!["Sunny", "Overcast", "Rain"]);
        assert_eq!(partitions[0].1.rows(), &[0, 1, 7, 8, 10]);
        assert_eq!(partitions[1].1.labels(), vec![true; 4]);
        assert_eq!(
            partitions.iter().map(|(_, group)| group.len()).sum::<usize>(),
            view.len()
        );
    }

    #[test]
    fn test_view_partition_unknown_attribute() {
        let dataset = Dataset::play_tennis();
        assert!(dataset.view().partition("Day").is_err());
    }

    #[test]
    fn test_dataset_train_test_split() {
        let dataset = Dataset::play_tennis();
        let (train, test) = dataset.train_test_split(0.5, Some(7)).unwrap();
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 7);
        assert_eq!(train.attributes(), dataset.attributes());

        let (again, _) = dataset.train_test_split(0.5, Some(7)).unwrap();
        assert_eq!(train, again);
    }

    #[test]
    fn test_dataset_train_test_split_invalid_size() {
        let dataset = Dataset::play_tennis();
        assert!(dataset.train_test_split(1.5, None).is_err());
    }
}
