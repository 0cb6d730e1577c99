mod fixture_source;
mod scrape_cycle;
