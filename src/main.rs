use eventdesk::prelude::*;
use serde_json::json;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let seed = json!([
      {
        "id": "1",
        "name": "Barclays Business Breakfast",
        "date": "2025-10-23T08:50",
        "location": "Racquet Club",
        "description": "A morning of networking and business insights.",
        "itinerary": [
          {
            "id": "1",
            "title": "Introduction",
            "startTime": "08:00",
            "endTime": "09:00",
            "speaker": "Omer Motiwala",
            "description": "Opening remarks."
          }
        ],
        "sponsors": [
          {
            "id": "1",
            "name": "Axel",
            "website": "https://axel.com",
            "description": "Tech partner."
          }
        ],
        "survey": [
          { "id": "1", "question": "Rate the coffee", "type": "Text", "required": true }
        ],
        "polls": [
          { "id": "1", "question": "Enjoying the talk?", "options": ["Yes", "No"] }
        ],
        "status": true
      },
      {
        "id": "2",
        "name": "Tech Innovators Summit",
        "date": "2025-11-12T10:00",
        "location": "Silicon Valley Hub",
        "description": "Discussing the future of AI and robotics.",
        "status": false
      },
      {
        "id": "3",
        "name": "Design Week Finale",
        "date": "2025-12-05T18:00",
        "location": "The Art House",
        "description": "Celebrating local designers.",
        "status": true
      }
    ]);
    let events: Vec<EventRecord> = serde_json::from_value(seed)?;

    let committed = EventConsole::new(events).run()?;

    println!("{}", serde_json::to_string_pretty(&committed)?);
    Ok(())
}
