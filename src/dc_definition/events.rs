use super::DescriptorError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::BufRead;

/// Structural event of a descriptor document
///
/// Element names are local names; namespace prefixes are dropped.
/// Empty elements (`<at-build-time/>`) arrive as a `Start` followed by an `End`.
/// Text is passed on untrimmed; readers trim the joined text of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum XmlEvent {
    Start(String),
    End(String),
    Text(String),
}

/// Pull source of [`XmlEvent`]s shared by the definition reader and the
/// dependencies reader
///
/// Keeps the stack of currently open elements, which is what turns an
/// unbalanced or truncated document into a [`DescriptorError`] instead of a
/// silently short event stream.
pub(crate) struct XmlEventSource<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    open_elements: Vec<String>,
}

impl<R: BufRead> XmlEventSource<R> {
    pub(crate) fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().expand_empty_elements = true;

        Self {
            reader,
            buf: Vec::new(),
            open_elements: Vec::new(),
        }
    }

    /// Returns the next structural event
    ///
    /// `Ok(None)` marks a clean end of input. Reaching the end while elements
    /// are still open is an error, as is an end tag that does not close the
    /// innermost open element.
    pub(crate) fn next_event(&mut self) -> Result<Option<XmlEvent>, DescriptorError> {
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(start) => {
                    let name = decode(start.local_name().as_ref())?;
                    self.open_elements.push(name.clone());
                    XmlEvent::Start(name)
                }
                Event::End(end) => {
                    let name = decode(end.local_name().as_ref())?;
                    match self.open_elements.pop() {
                        Some(open) if open == name => XmlEvent::End(name),
                        expected => {
                            return Err(DescriptorError::UnbalancedEndTag {
                                expected,
                                found: name,
                            })
                        }
                    }
                }
                Event::Text(text) => {
                    // whitespace and stray text outside the root element
                    if self.open_elements.is_empty() {
                        continue;
                    }
                    XmlEvent::Text(text.unescape()?.into_owned())
                }
                Event::CData(cdata) => {
                    if self.open_elements.is_empty() {
                        continue;
                    }
                    XmlEvent::Text(decode(&cdata)?)
                }
                Event::Eof => {
                    return match self.open_elements.last() {
                        Some(open) => Err(DescriptorError::UnexpectedEof {
                            element: open.clone(),
                        }),
                        None => Ok(None),
                    };
                }
                _ => continue,
            };

            return Ok(Some(event));
        }
    }

    /// Number of currently open elements
    pub(crate) fn depth(&self) -> usize {
        self.open_elements.len()
    }

    /// Consumes events up to and including the end of the element opened last
    pub(crate) fn skip_element(&mut self) -> Result<(), DescriptorError> {
        let depth = self.depth();
        debug_assert!(depth > 0, "skip_element called outside of an element");

        while let Some(event) = self.next_event()? {
            if matches!(event, XmlEvent::End(_)) && self.depth() < depth {
                return Ok(());
            }
        }
        Ok(())
    }

    /// Collects the text of the element opened last and consumes its end tag
    ///
    /// Text of nested elements is not included.
    pub(crate) fn read_text(&mut self) -> Result<String, DescriptorError> {
        let mut text = String::new();

        while let Some(event) = self.next_event()? {
            match event {
                XmlEvent::Text(chunk) => text.push_str(&chunk),
                XmlEvent::Start(_) => self.skip_element()?,
                XmlEvent::End(_) => break,
            }
        }

        Ok(text.trim().to_string())
    }
}

fn decode(bytes: &[u8]) -> Result<String, DescriptorError> {
    Ok(std::str::from_utf8(bytes)?.to_string())
}
