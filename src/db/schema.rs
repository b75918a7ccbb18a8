pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS slots (
    slot TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
";
