//! Interactive kit browser behind `fetch-kit`.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;
use serde::Serialize;
use typekit::{Client, KitList, KitSummary, Transport};

const PROMPT: &str = "Please input:\n the number of the kit you want to see \n \
                      or 'q' for quit:\n or 'p' for print all kits";
const WRONG_NUMBER: &str = "Wrong number, please select another kit:";

/// One line of user input, interpreted against the current kit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Quit,
    PrintAll,
    /// 1-based kit number.
    Kit(usize),
    WrongNumber,
}

impl Selection {
    /// Interpret `input` (already stripped of its line ending).
    ///
    /// Anything other than `q` or `p` is read as an integer the lenient way:
    /// leading whitespace, optional sign, then digits, ignoring the rest.
    /// Input without digits reads as 0 and so becomes [`Selection::WrongNumber`].
    pub fn parse(input: &str, kit_count: usize) -> Self {
        match input {
            "q" => Selection::Quit,
            "p" => Selection::PrintAll,
            _ => match usize::try_from(leading_integer(input)) {
                Ok(n) if (1..=kit_count).contains(&n) => Selection::Kit(n),
                _ => Selection::WrongNumber,
            },
        }
    }
}

fn leading_integer(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |n, d| n.saturating_mul(10).saturating_add(i64::from(d - b'0')));
    if negative { -magnitude } else { magnitude }
}

/// Terminal loop over one account's kits.
pub struct Browser<'a, T, W> {
    client: &'a Client<T>,
    kits: KitList,
    out: W,
}

impl<'a, T: Transport, W: Write> Browser<'a, T, W> {
    /// Fetch the kit list. Nothing is printed yet.
    pub fn new(client: &'a Client<T>, out: W) -> Result<Self> {
        let kits = client.list_kits()?;
        debug!("fetched {} kits", kits.kits.len());
        Ok(Self { client, kits, out })
    }

    pub fn kits(&self) -> &KitList {
        &self.kits
    }

    /// Print the listing, then serve selections until `q` or end of input.
    ///
    /// With no kits there is nothing to select and the prompt is skipped.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        self.print_list()?;
        if self.kits.kits.is_empty() {
            return Ok(());
        }

        let mut line = String::new();
        loop {
            writeln!(self.out, "{PROMPT}")?;
            self.out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let choice = line.strip_suffix('\n').unwrap_or(&line);
            let choice = choice.strip_suffix('\r').unwrap_or(choice);

            match Selection::parse(choice, self.kits.kits.len()) {
                Selection::Quit => return Ok(()),
                Selection::PrintAll => self.print_all()?,
                Selection::Kit(number) => {
                    writeln!(self.out, "Fetch more information for Number {number} kit:")?;
                    let id = self.kits.kits[number - 1].id.clone();
                    self.print_detail(&id)?;
                }
                Selection::WrongNumber => writeln!(self.out, "{WRONG_NUMBER}")?,
            }
        }
    }

    /// Listing as pretty JSON, the kit count, then each kit's fields.
    pub fn print_list(&mut self) -> Result<()> {
        write_json(&mut self.out, &self.kits)?;
        writeln!(self.out, "You have {} kits in total.", self.kits.kits.len())?;
        for (index, kit) in self.kits.kits.iter().enumerate() {
            write_summary(&mut self.out, index + 1, kit)?;
        }
        Ok(())
    }

    /// Listing followed by the full detail of every kit, in list order.
    pub fn print_all(&mut self) -> Result<()> {
        writeln!(self.out, "Fetch all data in each kit")?;
        write_json(&mut self.out, &self.kits)?;
        writeln!(self.out, "You have {} kits in total", self.kits.kits.len())?;
        for (index, kit) in self.kits.kits.iter().enumerate() {
            write_summary(&mut self.out, index + 1, kit)?;
            write_json(&mut self.out, &self.client.kit(&kit.id)?)?;
        }
        Ok(())
    }

    fn print_detail(&mut self, id: &str) -> Result<()> {
        let detail = self.client.kit(id)?;
        write_json(&mut self.out, &detail)
    }
}

fn write_json<W: Write, S: Serialize>(out: &mut W, value: &S) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn write_summary<W: Write>(out: &mut W, number: usize, kit: &KitSummary) -> Result<()> {
    writeln!(out, "Number {number} kit information:")?;
    for (key, value) in kit.fields() {
        writeln!(out, "{key}:{value}")?;
    }
    Ok(())
}

/// Delete kits by ID, in order.
pub fn delete_kits<T: Transport, W: Write, S: AsRef<str>>(
    client: &Client<T>,
    ids: &[S],
    out: &mut W,
) -> Result<()> {
    for id in ids.iter().map(AsRef::as_ref) {
        client.delete_kit(id)?;
        writeln!(out, "Deleted kit {id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_and_print_all() {
        assert_eq!(Selection::parse("q", 3), Selection::Quit);
        assert_eq!(Selection::parse("p", 0), Selection::PrintAll);
    }

    #[test]
    fn test_kit_numbers_in_range() {
        assert_eq!(Selection::parse("1", 3), Selection::Kit(1));
        assert_eq!(Selection::parse("3", 3), Selection::Kit(3));
    }

    #[test]
    fn test_out_of_range_is_wrong_number() {
        assert_eq!(Selection::parse("0", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("-1", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("4", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("99999999999999999999999", 3), Selection::WrongNumber);
    }

    // Intentional quirk kept for behavioural compatibility: non-numeric input
    // reads as 0 and trailing junk after the digits is ignored.
    #[test]
    fn test_lenient_integer_quirk() {
        assert_eq!(Selection::parse("abc", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("Q", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("q ", 3), Selection::WrongNumber);
        assert_eq!(Selection::parse("2x", 3), Selection::Kit(2));
        assert_eq!(Selection::parse("  +2", 3), Selection::Kit(2));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("42abc"), 42);
        assert_eq!(leading_integer("-7"), -7);
        assert_eq!(leading_integer("- 7"), 0);
        assert_eq!(leading_integer("x1"), 0);
    }
}
