//! Load and save operations for the persisted chart

use super::schema::ChartDatabase;
use crate::chart::DepthChart;
use crate::error::Result;
use rusqlite::params;
use tracing::info;

impl ChartDatabase {
    /// Read the full chart, rosters ordered by depth
    pub fn load_chart(&self) -> Result<DepthChart> {
        let mut stmt = self.conn.prepare(
            "SELECT position, player
             FROM depth_chart
             ORDER BY position, depth",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut chart = DepthChart::new();
        for row in rows {
            let (position, player) = row?;
            chart.0.entry(position).or_default().push(player);
        }
        Ok(chart)
    }

    /// Replace the stored chart with `chart` in a single transaction
    pub fn save_chart(&mut self, chart: &DepthChart) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM depth_chart", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO depth_chart (position, depth, player)
                 VALUES (?, ?, ?)",
            )?;
            for (position, players) in chart.iter() {
                for (depth, player) in players.iter().enumerate() {
                    stmt.execute(params![position, depth as i64, player])?;
                }
            }
        }
        tx.commit()?;

        info!(positions = chart.len(), "depth chart saved");
        Ok(())
    }

    /// Remove every stored roster
    pub fn clear(&mut self) -> Result<()> {
        self.conn.execute("DELETE FROM depth_chart", [])?;
        Ok(())
    }
}
