//! Interactive numbered menu over a [RideManager].
//!
//! Input is read as whitespace-separated tokens, so `Asha 7` on one line and `Asha` / `7` on
//! two lines behave the same. End of input ends the session like option 6.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use dispatch_core::export::export_all_driver_histories;
use dispatch_core::{DispatchError, LocationId, RideManager};
use log::{debug, error};

const MENU: &str = "1) Register Rider\n2) Request Ride\n3) Show Rider History\n4) Show Drivers\n\
                    5) Save Driver History\n6) Exit\n7) Release Driver\nEnter choice: ";

pub struct Menu<R, W> {
    input: R,
    output: W,
    manager: RideManager,
    export_dir: PathBuf,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, manager: RideManager, export_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            manager,
            export_dir,
            pending: VecDeque::new(),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (RideManager, W) {
        (self.manager, self.output)
    }

    /// Run until the user picks Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--------------RouteRide Selection-------------")?;
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(choice) = self.next_token()? else {
                writeln!(self.output, "\n--Exiting RouteRide--")?;
                return Ok(());
            };
            debug!("Menu choice {:?}", choice);

            match choice.as_str() {
                "1" => self.register_rider()?,
                "2" => self.request_ride()?,
                "3" => self.show_rider_histories()?,
                "4" => self.show_drivers()?,
                "5" => self.save_driver_histories()?,
                "6" => {
                    writeln!(self.output, "--Exiting RouteRide--")?;
                    return Ok(());
                }
                "7" => self.release_driver()?,
                _ => writeln!(self.output, "Invalid Input!")?,
            }
        }
    }

    fn register_rider(&mut self) -> io::Result<()> {
        write!(self.output, "Enter name and ID: ")?;
        self.output.flush()?;
        let Some(name) = self.next_token()? else {
            return Ok(());
        };
        let Some(id) = self.next_parsed::<i64>()? else {
            writeln!(self.output, "Invalid ID!")?;
            return Ok(());
        };
        self.manager.register_rider(id, name);
        writeln!(self.output, "Rider Registered Successfully.")
    }

    fn request_ride(&mut self) -> io::Result<()> {
        let riders = self.manager.list_riders();
        if riders.is_empty() {
            return writeln!(self.output, "Register a rider first.");
        }

        writeln!(self.output, "Select Rider Index: ")?;
        for (index, rider) in riders.iter().enumerate() {
            writeln!(self.output, "{index}: {}", rider.name)?;
        }
        let Some(rider) = self.next_index(riders.len())? else {
            return writeln!(self.output, "Invalid rider index!");
        };

        writeln!(self.output, "Available Locations:")?;
        let location_lines: Vec<String> = self
            .manager
            .locations()
            .iter()
            .map(|(id, location)| format!("{}: {}", id.0, location))
            .collect();
        for line in &location_lines {
            writeln!(self.output, "{line}")?;
        }
        let location_count = location_lines.len();

        write!(self.output, "Enter source index: ")?;
        self.output.flush()?;
        let source = self.next_index(location_count)?;
        write!(self.output, "Enter destination index: ")?;
        self.output.flush()?;
        let destination = self.next_index(location_count)?;
        let (Some(source), Some(destination)) = (source, destination) else {
            return writeln!(self.output, "Invalid location index!");
        };

        match self.manager.request_ride(
            riders[rider].handle,
            LocationId(source),
            LocationId(destination),
        ) {
            Ok(ride) => {
                writeln!(self.output, "Ride Started.")?;
                writeln!(self.output, "Ride ended.")?;
                if let Some(view) = self.manager.ride(ride) {
                    writeln!(self.output, "{view}")?;
                }
                Ok(())
            }
            Err(DispatchError::NoDriversAvailable) => {
                writeln!(self.output, "Drivers are Not Available.")
            }
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    fn show_rider_histories(&mut self) -> io::Result<()> {
        for rider in self.manager.list_riders() {
            writeln!(self.output, "\nRide history for Rider: {}", rider.name)?;
            let rides = self
                .manager
                .rider_history(rider.handle)
                .unwrap_or_default();
            for ride in rides {
                writeln!(self.output, "{ride}")?;
            }
        }
        Ok(())
    }

    fn show_drivers(&mut self) -> io::Result<()> {
        for driver in self.manager.list_drivers() {
            writeln!(self.output, "{driver}")?;
        }
        Ok(())
    }

    fn save_driver_histories(&mut self) -> io::Result<()> {
        writeln!(self.output, "Saving all driver histories...")?;
        match export_all_driver_histories(&self.manager, &self.export_dir) {
            Ok(paths) => {
                for path in paths {
                    writeln!(self.output, "Saved {}", path.display())?;
                }
                Ok(())
            }
            Err(err) => {
                error!("Driver history export failed: {}", err);
                writeln!(self.output, "Error: {err}")
            }
        }
    }

    fn release_driver(&mut self) -> io::Result<()> {
        let drivers = self.manager.list_drivers();
        if drivers.is_empty() {
            return writeln!(self.output, "No drivers registered.");
        }
        writeln!(self.output, "Select Driver Index: ")?;
        for (index, driver) in drivers.iter().enumerate() {
            let state = if driver.available {
                "Available"
            } else {
                "Unavailable"
            };
            writeln!(self.output, "{index}: {} ({state})", driver.name)?;
        }
        let Some(index) = self.next_index(drivers.len())? else {
            return writeln!(self.output, "Invalid driver index!");
        };
        match self.manager.release_driver(drivers[index].handle) {
            Ok(()) => writeln!(self.output, "Driver {} is available.", drivers[index].name),
            Err(err) => writeln!(self.output, "Error: {err}"),
        }
    }

    /// Next token parsed as an index below `len`; `None` for bad or out-of-range input.
    fn next_index(&mut self, len: usize) -> io::Result<Option<usize>> {
        Ok(self.next_parsed::<usize>()?.filter(|index| *index < len))
    }

    fn next_parsed<T: std::str::FromStr>(&mut self) -> io::Result<Option<T>> {
        Ok(self.next_token()?.and_then(|token| token.parse().ok()))
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
