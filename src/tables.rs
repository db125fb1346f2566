//! The table definitions of the tracking store, and the routine that creates
//! them in an empty SQLite file.
/**
 *     /\
 *    ( /   @ @    ()
 *     \  __| |__  /
 *      -/   "   \-
 *     /-|       |-\
 *    / /-\     /-\ \
 *     / /-`---'-\ \
 *      /         \ CRABCAVE
 *
 *   tables.rs - schema description and materialization
 *
 */

use crate::error::{Error, Result};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::info;

/// Column storage types, as declared in the DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Varchar,
    Date,
    Time,
    Float,
    Boolean,
}

impl SqlType {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SqlType::Integer => "INTEGER",
            SqlType::Varchar => "VARCHAR",
            SqlType::Date => "DATE",
            SqlType::Time => "TIME",
            SqlType::Float => "FLOAT",
            SqlType::Boolean => "BOOLEAN",
        }
    }
}

/// A single column and its constraints.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub primary_key: bool,
    pub nullable: bool,
    pub unique: bool,
    /// Referenced table; the referenced column is always `id`.
    pub references: Option<&'static str>,
}

impl ColumnDef {
    const fn new(name: &'static str, sql_type: SqlType) -> ColumnDef {
        ColumnDef {
            name,
            sql_type,
            primary_key: false,
            nullable: true,
            unique: false,
            references: None,
        }
    }

    const fn id() -> ColumnDef {
        ColumnDef {
            primary_key: true,
            nullable: false,
            ..ColumnDef::new("id", SqlType::Integer)
        }
    }

    const fn required(self) -> ColumnDef {
        ColumnDef { nullable: false, ..self }
    }

    const fn unique(self) -> ColumnDef {
        ColumnDef { unique: true, ..self }
    }

    const fn references(self, table: &'static str) -> ColumnDef {
        ColumnDef { references: Some(table), ..self }
    }
}

/// A table: its name and ordered columns.
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl TableDef {
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Render the CREATE TABLE statement for this table.
    pub fn create_sql(&self) -> String {
        let mut lines: Vec<String> = vec![];

        for col in self.columns {
            let mut line = format!("\t{} {}", col.name, col.sql_type.as_sql());
            if !col.nullable {
                line.push_str(" NOT NULL");
            }
            lines.push(line);
        }

        for col in self.columns.iter().filter(|c| c.primary_key) {
            lines.push(format!("\tPRIMARY KEY ({})", col.name));
        }

        for col in self.columns.iter().filter(|c| c.unique) {
            lines.push(format!("\tUNIQUE ({})", col.name));
        }

        for col in self.columns {
            if let Some(parent) = col.references {
                lines.push(format!("\tFOREIGN KEY({}) REFERENCES {} (id)", col.name, parent));
            }
        }

        format!("CREATE TABLE {} (\n{}\n)", self.name, lines.join(",\n"))
    }
}

use SqlType::*;

const EXPERIMENTS: TableDef = TableDef {
    name: "experiments",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required(),
        ColumnDef::new("description", Varchar),
    ],
};

const EXPERIMENTERS: TableDef = TableDef {
    name: "experimenters",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required().unique(),
    ],
};

const RATS: TableDef = TableDef {
    name: "rats",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required().unique(),
        ColumnDef::new("birthdate", Date),
    ],
};

const SESSIONS: TableDef = TableDef {
    name: "sessions",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("experiment_id", Integer).required().references("experiments"),
        ColumnDef::new("experimenter_id", Integer).required().references("experimenters"),
        ColumnDef::new("rat_id", Integer).required().references("rats"),
        ColumnDef::new("date", Date).required(),
        ColumnDef::new("time", Time).required(),
        ColumnDef::new("video_filename", Varchar),
        ColumnDef::new("motive_take_filename", Varchar),
    ],
};

const CONDITIONS: TableDef = TableDef {
    name: "conditions",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required(),
        ColumnDef::new("description", Varchar),
        ColumnDef::new("experiment_id", Integer).required().references("experiments"),
    ],
};

// Not linked to anything yet.
const LEVELS: TableDef = TableDef {
    name: "levels",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required().unique(),
        ColumnDef::new("description", Varchar),
    ],
};

const TRACKINGOBJECTS: TableDef = TableDef {
    name: "trackingobjects",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("name", Varchar).required().unique(),
        ColumnDef::new("system", Varchar),
    ],
};

const TRACKINGDATA: TableDef = TableDef {
    name: "trackingdata",
    columns: &[
        ColumnDef::id(),
        ColumnDef::new("condition_id", Integer).references("conditions"),
        ColumnDef::new("session_id", Integer).references("sessions"),
        ColumnDef::new("trackingobject_id", Integer).references("trackingobjects"),
        ColumnDef::new("time", Time).required(),
        ColumnDef::new("motive_timestamp", Integer),
        ColumnDef::new("is_visible", Boolean),
        ColumnDef::new("x", Float).required(),
        ColumnDef::new("y", Float).required(),
        ColumnDef::new("z", Float).required(),
        ColumnDef::new("rot_x", Float),
        ColumnDef::new("rot_y", Float),
        ColumnDef::new("rot_z", Float),
        ColumnDef::new("rot_qx", Float),
        ColumnDef::new("rot_qy", Float),
        ColumnDef::new("rot_qz", Float),
        ColumnDef::new("rot_qw", Float),
        ColumnDef::new("ori_x", Float),
        ColumnDef::new("ori_y", Float),
        ColumnDef::new("ori_z", Float),
    ],
};

/// Every table in the store. Parents come before the tables that reference them.
pub static TABLES: [TableDef; 8] = [
    EXPERIMENTS,
    EXPERIMENTERS,
    RATS,
    SESSIONS,
    CONDITIONS,
    LEVELS,
    TRACKINGOBJECTS,
    TRACKINGDATA,
];

/// The names of all the tables, in creation order.
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|t| t.name).collect()
}

/// Look up a table definition by name.
pub fn table(name: &str) -> Option<&'static TableDef> {
    TABLES.iter().find(|t| t.name == name)
}

#[derive(QueryableByName)]
struct MasterName {
    #[diesel(sql_type = Text)]
    name: String,
}

/// Return the names of the tables the store already holds.
pub fn existing_tables(conn: &mut SqliteConnection) -> Result<Vec<String>> {
    let rows: Vec<MasterName> =
        diesel::sql_query("SELECT name FROM sqlite_master WHERE type = 'table'").load(conn)?;
    Ok(rows.into_iter().map(|r| r.name).collect())
}

/// Create all the tables in an empty store.
///
/// Fails with `Error::SchemaConflict` if any one of them exists already, in
/// which case nothing is created.
///
/// * `conn` - an open SqliteConnection.
pub fn materialize(conn: &mut SqliteConnection) -> Result<()> {
    let existing = existing_tables(conn)?;

    if let Some(clash) = TABLES.iter().find(|t| existing.iter().any(|e| e == t.name)) {
        return Err(Error::SchemaConflict { table: clash.name.to_string() });
    }

    conn.transaction::<_, Error, _>(|conn| {
        for table in TABLES.iter() {
            conn.batch_execute(&table.create_sql())?;
            info!("Created table {}", table.name);
        }
        Ok(())
    })
}
