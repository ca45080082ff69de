use std::fmt;
use std::result::Result as StdResult;

use nom::{
    IResult,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::{map, map_res},
    multi::separated_list,
    sequence::{delimited, preceded, terminated, tuple},
    error::context,
};

use crate::error::FieldOverflow;
use crate::instruction::{Address, FunctionCode, Instruction, FIELD_WIDTH};

use super::image::RomImage;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// Something other than whitespace follows the terminating `;`.
    TrailingInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::TrailingInput => write!(f, "unexpected input after the end of the image"),
        }
    }
}

pub type ParseError = crate::error::ParseError<ErrorKind>;
type Result<'a, T> = IResult<&'a str, T, ParseError>;

fn is_bit(c: char) -> bool {
    c == '0' || c == '1'
}

fn take_field(input: &str) -> Result<usize> {
    context(
        "field",
        map_res(
            preceded(tag("b"), take_while_m_n(FIELD_WIDTH, FIELD_WIDTH, is_bit)),
            |bits| usize::from_str_radix(bits, 2),
        ),
    )(input)
}

fn separator(input: &str) -> Result<char> {
    delimited(multispace0, char(','), multispace0)(input)
}

fn take_instruction(input: &str) -> Result<Instruction> {
    map_res(
        delimited(
            terminated(char('{'), multispace0),
            tuple((
                terminated(take_field, separator),
                terminated(take_field, separator),
                terminated(take_field, separator),
                take_field,
            )),
            preceded(multispace0, char('}')),
        ),
        |(function, left, right, destination)| -> StdResult<Instruction, FieldOverflow> {
            Ok(Instruction {
                function: FunctionCode::new(function)?,
                left: Address::new(left)?,
                right: Address::new(right)?,
                destination: Address::new(destination)?,
            })
        },
    )(input)
}

fn take_rom_image(input: &str) -> Result<RomImage> {
    map(
        delimited(
            terminated(char('{'), multispace0),
            separated_list(separator, take_instruction),
            tuple((multispace0, char('}'), multispace0, char(';'))),
        ),
        RomImage::from_rom_order,
    )(input)
}

pub(crate) fn parse_rom_image(input: &str) -> StdResult<RomImage, ParseError> {
    let (rest, image) = match preceded(multispace0, take_rom_image)(input) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => return Err(err),
        Err(nom::Err::Incomplete(_)) => return Err(ParseError::incomplete()),
    };

    let rest = rest.trim_start();

    if !rest.is_empty() {
        return Err(ParseError::from_kind(rest.to_string(), ErrorKind::TrailingInput));
    }

    Ok(image)
}
